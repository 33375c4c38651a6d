use super::*;

#[test]
fn sides_iterate_clockwise_from_top() {
    let s = Sides::new(1, 2, 3, 4);
    let order: Vec<(Side, i32)> = s.iter().map(|(side, v)| (side, *v)).collect();
    assert_eq!(
        order,
        vec![
            (Side::Top, 2),
            (Side::Right, 3),
            (Side::Bottom, 4),
            (Side::Left, 1)
        ]
    );
    assert_eq!(*s.get(Side::Bottom), 4);
}

#[test]
fn sides_uniformity_and_sums() {
    assert!(Sides::splat(2.0).is_uniform());
    assert!(!Sides::new(1.0, 1.0, 1.0, 2.0).is_uniform());
    let s = Sides::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(s.sum_x(), 4.0);
    assert_eq!(s.sum_y(), 6.0);
}

#[test]
fn edges_run_between_adjacent_corners() {
    for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
        assert_eq!(side.start_corner().next(), side.end_corner());
    }
    assert_eq!(Side::Top.start_corner(), Corner::TopLeft);
    assert_eq!(Side::Left.end_corner(), Corner::TopLeft);
}

#[test]
fn corners_map_and_get() {
    let c = Corners::splat(1).map(|v| v * 3);
    assert_eq!(*c.get(Corner::BottomLeft), 3);
    assert_eq!(Axes::splat(2).map(|v| v + 1), Axes::new(3, 3));
}
