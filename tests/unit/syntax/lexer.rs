use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src, 0);
    let mut out = Vec::new();
    loop {
        let t = lexer.next_token().unwrap();
        if t.kind == TokenKind::Eof {
            break;
        }
        out.push(t.kind);
    }
    out
}

#[test]
fn numbers_carry_units() {
    assert_eq!(
        kinds("2cm 50% 3 1.25in .5pt"),
        vec![
            TokenKind::Numeric(2.0, "cm".to_owned()),
            TokenKind::Numeric(50.0, "%".to_owned()),
            TokenKind::Numeric(3.0, String::new()),
            TokenKind::Numeric(1.25, "in".to_owned()),
            TokenKind::Numeric(0.5, "pt".to_owned()),
        ]
    );
}

#[test]
fn punctuation_idents_and_strings() {
    assert_eq!(
        kinds(r#"(x: 5pt + red, "a\"b")"#),
        vec![
            TokenKind::LParen,
            TokenKind::Ident("x".to_owned()),
            TokenKind::Colon,
            TokenKind::Numeric(5.0, "pt".to_owned()),
            TokenKind::Plus,
            TokenKind::Ident("red".to_owned()),
            TokenKind::Comma,
            TokenKind::Str("a\"b".to_owned()),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("// nothing here\n  top // trailing"),
        vec![TokenKind::Ident("top".to_owned())]
    );
}

#[test]
fn spans_are_byte_offsets() {
    let mut lexer = Lexer::new("(left: 10pt)", 0);
    lexer.next_token().unwrap();
    let key = lexer.next_token().unwrap();
    assert_eq!(key.span, Span::new(1, 5));
    lexer.next_token().unwrap();
    let len = lexer.next_token().unwrap();
    assert_eq!(len.span, Span::new(7, 11));
}

#[test]
fn unknown_character_is_a_syntax_error() {
    let err = Lexer::new("@", 0).next_token().unwrap_err();
    assert!(matches!(err, RectError::Syntax { span, .. } if span == Span::new(0, 1)));
}

#[test]
fn unclosed_string_is_reported() {
    let err = Lexer::new("\"abc", 0).next_token().unwrap_err();
    assert!(err.to_string().contains("unclosed string"));
}
