use super::*;
use crate::eval::document::eval_rect;
use crate::foundation::units::Length;

#[test]
fn builder_matches_evaluated_call() {
    let built = RectBuilder::new()
        .width(Length::cm(2.0))
        .fill(Color::named("purple"))
        .inset_all(Length::pt(5.0).into())
        .body("text")
        .build();
    let parsed = eval_rect("rect(width: 2cm, fill: purple, inset: 5pt)[text]").unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn build_style_drops_the_body() {
    let style = RectBuilder::new()
        .stroke_all(PartialStroke::paint(Color::BLACK))
        .body("ignored")
        .build_style();
    assert_eq!(
        style.stroke,
        Some(SidesValue::Uniform(Some(PartialStroke::paint(Color::BLACK))))
    );
    assert!(style.width.is_none());
}
