use kurbo::{PathEl, Shape};

use super::*;

fn sharp(w: f64, h: f64) -> RoundedBox {
    RoundedBox::new(Rect::new(0.0, 0.0, w, h), Corners::splat(Axes::splat(0.0)))
}

fn round(w: f64, h: f64, r: f64) -> RoundedBox {
    RoundedBox::new(Rect::new(0.0, 0.0, w, h), Corners::splat(Axes::splat(r)))
}

#[test]
fn sharp_outline_is_the_rectangle() {
    let path = sharp(10.0, 20.0).outline();
    let lines = path
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::LineTo(_)))
        .count();
    assert_eq!(lines, 4);
    assert!(!path.elements().iter().any(|el| matches!(el, PathEl::CurveTo(..))));
    assert!((path.area().abs() - 200.0).abs() < 1e-9);
    assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 10.0, 20.0));
}

#[test]
fn rounded_outline_area_matches_circle_corners() {
    let path = round(40.0, 20.0, 5.0).outline();
    let expected = 40.0 * 20.0 - (4.0 - std::f64::consts::PI) * 25.0;
    assert!((path.area().abs() - expected).abs() < 0.05, "{}", path.area());
    let curves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::CurveTo(..)))
        .count();
    assert_eq!(curves, 4);
}

#[test]
fn corner_midpoint_lies_on_circle() {
    let p = round(40.0, 20.0, 5.0).corner_midpoint(Corner::TopLeft);
    let expected = 5.0 * (1.0 - std::f64::consts::FRAC_1_SQRT_2);
    assert!((p.x - expected).abs() < 1e-9);
    assert!((p.y - expected).abs() < 1e-9);
}

#[test]
fn edges_run_between_corner_midpoints() {
    let shape = round(40.0, 20.0, 5.0);
    let top = shape.edge(Side::Top);
    let start = top.elements()[0];
    let PathEl::MoveTo(p) = start else {
        panic!("edge must start with move_to");
    };
    let mid = shape.corner_midpoint(Corner::TopLeft);
    assert!((p - mid).hypot() < 1e-9);
    let end = top.segments().last().map(|s| s.end()).unwrap();
    assert!((end - shape.corner_midpoint(Corner::TopRight)).hypot() < 1e-9);
}

#[test]
fn sharp_edge_spans_the_full_side() {
    let right = sharp(10.0, 20.0).edge(Side::Right);
    assert_eq!(right.bounding_box(), Rect::new(10.0, 0.0, 10.0, 20.0));
}

#[test]
fn grow_inflates_rounded_corners_only() {
    let mut radii = Corners::splat(Axes::splat(0.0));
    radii.top_left = Axes::splat(4.0);
    let g = RoundedBox::new(Rect::new(0.0, 0.0, 10.0, 10.0), radii).grow(1.0);
    assert_eq!(g.rect, Rect::new(-1.0, -1.0, 11.0, 11.0));
    assert_eq!(g.radii.top_left, Axes::splat(5.0));
    assert_eq!(g.radii.bottom_right, Axes::splat(0.0));
    assert!(g.is_rounded(Corner::TopLeft));
    assert!(!g.is_rounded(Corner::TopRight));
}

#[test]
fn clamped_limits_each_axis_to_half_the_box() {
    let mut radii = Corners::splat(Axes::new(4.0, 30.0));
    radii.bottom_left = Axes::new(-1.0, 2.0);
    let c = RoundedBox::new(Rect::new(0.0, 0.0, 20.0, 10.0), radii).clamped();
    assert_eq!(c.radii.top_left, Axes::new(4.0, 5.0));
    assert_eq!(c.radii.bottom_left, Axes::new(0.0, 2.0));

    let flat = RoundedBox::new(Rect::new(0.0, 0.0, 20.0, 0.0), Corners::splat(Axes::new(5.0, 10.0)));
    assert_eq!(flat.clamped().radii, Corners::splat(Axes::new(5.0, 0.0)));
    assert!(!flat.clamped().is_rounded(Corner::TopLeft));
}
