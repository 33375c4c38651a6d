use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RectError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RectError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(RectError::render("x").to_string().contains("render error:"));
    assert!(
        RectError::syntax("bad", Span::new(1, 2))
            .to_string()
            .contains("syntax error at 1..2: bad")
    );
}

#[test]
fn invalid_key_names_key_span_and_valid_keys() {
    let err = RectError::invalid_key("cake", &["x", "y", "left"], Span::new(26, 30));
    let msg = err.to_string();
    assert!(msg.contains("\"cake\""), "{msg}");
    assert!(msg.contains("26..30"), "{msg}");
    assert!(msg.contains("\"x\", \"y\", and \"left\""), "{msg}");
    assert_eq!(err.span(), Some(Span::new(26, 30)));
}

#[test]
fn non_source_errors_have_no_span() {
    assert_eq!(RectError::validation("x").span(), None);
    assert_eq!(RectError::render("x").span(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RectError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
