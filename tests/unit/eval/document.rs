use super::*;
use crate::foundation::{
    color::Color,
    core::Axes,
    units::{Length, Rel},
};
use crate::model::{sides::SidesValue, stroke::PartialStroke};

fn eval(src: &str) -> Vec<RectSpec> {
    eval_document(src, &RectStyle::default())
        .unwrap()
        .into_iter()
        .map(|r| r.spec)
        .collect()
}

#[test]
fn set_rule_applies_to_following_calls_only() {
    let specs = eval("#rect()\n#set rect(fill: red)\n#rect()");
    assert_eq!(specs[0].style.fill, None);
    assert_eq!(specs[1].style.fill, Some(Color::named("red")));
}

#[test]
fn scoped_rules_end_with_their_scope() {
    let specs = eval("#[ #set rect(fill: red) #rect() ] #rect()");
    assert_eq!(specs[0].style.fill, Some(Color::named("red")));
    assert_eq!(specs[1].style.fill, None);
}

#[test]
fn explicit_stroke_replaces_inherited_mapping() {
    let specs = eval("#set rect(stroke: (right: red,))\n#rect(stroke: (x: 5pt, y: 1pt))");
    let thick = |v| Some(Some(PartialStroke::thickness(Length::pt(v))));
    assert_eq!(
        specs[0].style.stroke,
        Some(SidesValue::Axes(Axes::new(thick(5.0), thick(1.0))))
    );
}

#[test]
fn root_style_is_outermost() {
    let root = RectStyle {
        inset: Some(SidesValue::Uniform(Rel::abs(Length::pt(3.0)))),
        ..RectStyle::default()
    };
    let out = eval_document("#set rect(fill: blue)\n#rect[x]", &root).unwrap();
    assert_eq!(out[0].spec.style.inset, root.inset);
    assert_eq!(out[0].spec.style.fill, Some(Color::named("blue")));
    assert_eq!(out[0].spec.body.as_deref(), Some("x"));
}

#[test]
fn set_rules_reject_bodies() {
    assert!(eval_document(r#"#set rect("x")"#, &RectStyle::default()).is_err());
}

#[test]
fn body_twice_is_an_error() {
    let err = eval_rect(r#"rect("a")[b]"#).unwrap_err();
    assert!(err.to_string().contains("body given both"));
}

#[test]
fn spans_point_at_calls() {
    let src = "#set rect(fill: red)\n#rect(width: 1pt)";
    let out = eval_document(src, &RectStyle::default()).unwrap();
    assert_eq!(&src[out[0].span.start..out[0].span.end], "#rect(width: 1pt)");
}

#[test]
fn invalid_key_surfaces_from_document() {
    let err = eval_rect("rect(radius: (left: 10pt, cake: 5pt))").unwrap_err();
    assert_eq!(err.span(), Some(crate::foundation::span::Span::new(26, 30)));
}
