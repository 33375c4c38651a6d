use super::*;

#[test]
fn join_covers_both() {
    assert_eq!(Span::new(4, 6).join(Span::new(1, 3)), Span::new(1, 6));
    assert_eq!(Span::new(2, 9).len(), 7);
    assert!(Span::detached().is_empty());
}

#[test]
fn line_col_is_one_based() {
    let src = Source::new("ab\ncdé\nf");
    assert_eq!(src.line_col(0), (1, 1));
    assert_eq!(src.line_col(3), (2, 1));
    // `é` is two bytes but one column.
    assert_eq!(src.line_col(7), (2, 4));
    assert_eq!(src.line_col(8), (3, 1));
    assert_eq!(src.line_col(100), (3, 2));
}

#[test]
fn get_respects_char_boundaries() {
    let src = Source::new("xé");
    assert_eq!(src.get(Span::new(1, 3)), Some("é"));
    assert_eq!(src.get(Span::new(1, 2)), None);
}
