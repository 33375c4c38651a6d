use super::*;
use crate::eval::value::eval;
use crate::foundation::{span::Span, units::Length};
use crate::syntax::parser::Parser;

fn val(src: &str) -> Spanned<Value> {
    let expr = Parser::new(src, 0).parse_expr().unwrap();
    eval(&expr).unwrap()
}

fn pt(v: f64) -> Rel {
    Rel::abs(Length::pt(v))
}

#[test]
fn sizing_accepts_auto_and_lengths() {
    assert_eq!(sizing(&val("auto")).unwrap(), Sizing::Auto);
    assert_eq!(sizing(&val("1cm")).unwrap(), Sizing::Rel(Length::cm(1.0).into()));
    let err = sizing(&val("red")).unwrap_err();
    assert!(matches!(err, RectError::Type { .. }));
}

#[test]
fn stroke_forms() {
    assert_eq!(stroke(&val("none")).unwrap(), None);
    assert_eq!(
        stroke(&val("2pt")).unwrap(),
        Some(PartialStroke::thickness(Length::pt(2.0)))
    );
    assert_eq!(
        stroke(&val("blue")).unwrap(),
        Some(PartialStroke::paint(Color::named("blue").unwrap()))
    );
    assert!(stroke(&val("50%")).is_err());
}

#[test]
fn scalar_radius_applies_to_all_corners() {
    let r = corners(&val("5pt"), rel).unwrap();
    assert_eq!(r.to_corners(), Corners::splat(Axes::splat(Some(pt(5.0)))));
}

#[test]
fn radius_axes_set_components() {
    let r = corners(&val("(x: 5pt, y: 10pt)"), rel).unwrap();
    assert_eq!(
        r.to_corners(),
        Corners::splat(Axes::new(Some(pt(5.0)), Some(pt(10.0))))
    );
}

#[test]
fn radius_corners_are_named_clockwise() {
    let r = corners(&val("(left: 2pt, top: 5pt, right: 8pt, bottom: 11pt)"), rel)
        .unwrap()
        .to_corners();
    assert_eq!(r.top_left, Axes::splat(Some(pt(2.0))));
    assert_eq!(r.top_right, Axes::splat(Some(pt(5.0))));
    assert_eq!(r.bottom_right, Axes::splat(Some(pt(8.0))));
    assert_eq!(r.bottom_left, Axes::splat(Some(pt(11.0))));
}

#[test]
fn unknown_key_fails_with_its_span() {
    let src = "(left: 10pt, cake: 5pt)";
    let err = corners(&val(src), rel).unwrap_err();
    match err {
        RectError::InvalidKey { key, valid, span } => {
            assert_eq!(key, "cake");
            assert_eq!(valid, MAPPING_KEYS);
            assert_eq!(span, Span::new(13, 17));
        }
        other => panic!("expected InvalidKey, got {other:?}"),
    }
}

#[test]
fn unknown_key_wins_over_bad_values() {
    // `red` is not a valid inset, but the key is checked first.
    let err = sides(&val("(x: red, cake: 1pt)"), rel).unwrap_err();
    assert!(matches!(err, RectError::InvalidKey { ref key, .. } if key == "cake"));
}

#[test]
fn stroke_axes_map_to_edges() {
    let s = sides(&val("(x: 5pt, y: 1pt)"), stroke).unwrap().to_sides();
    assert_eq!(s.left, Some(Some(PartialStroke::thickness(Length::pt(5.0)))));
    assert_eq!(s.right, s.left);
    assert_eq!(s.top, Some(Some(PartialStroke::thickness(Length::pt(1.0)))));
    assert_eq!(s.bottom, s.top);
}

#[test]
fn repeated_key_keeps_last_value() {
    let s = sides(&val("(left: 1pt, left: 3pt)"), rel).unwrap().to_sides();
    assert_eq!(s.left, Some(pt(3.0)));
    assert_eq!(s.top, None);
}

#[test]
fn empty_mapping_sets_nothing() {
    let s = sides(&val("()"), rel).unwrap().to_sides();
    assert_eq!(s, Sides::splat(None));
}
