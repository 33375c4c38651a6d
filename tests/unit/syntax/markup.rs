use super::*;

#[test]
fn document_with_set_rule_and_calls() {
    let nodes = parse_document("#set rect(fill: red)\n#rect(width: 1cm)\n#rect[hi]").unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(matches!(nodes[0], Node::Set(_)));
    let Node::Rect(call) = &nodes[2] else {
        panic!("expected rect");
    };
    assert!(call.args.is_empty());
    assert_eq!(call.body.as_ref().map(|b| b.v.as_str()), Some("hi"));
}

#[test]
fn scopes_nest() {
    let nodes = parse_document("#[ #set rect(fill: red) #rect() ] #rect()").unwrap();
    assert_eq!(nodes.len(), 2);
    let Node::Scope(inner) = &nodes[0] else {
        panic!("expected scope");
    };
    assert_eq!(inner.len(), 2);
}

#[test]
fn body_brackets_balance_and_escape() {
    let call = parse_rect_call(r"rect[a [b] \] c]").unwrap();
    let body = call.body.unwrap();
    assert_eq!(body.v, "a [b] ] c");
    assert_eq!(body.span, Span::new(5, 15));
}

#[test]
fn call_span_covers_args_and_body() {
    let src = "  #rect(width: 1pt)[x]";
    let nodes = parse_document(src).unwrap();
    let Node::Rect(call) = &nodes[0] else {
        panic!("expected rect");
    };
    assert_eq!(call.span, Span::new(2, src.len()));
}

#[test]
fn structural_errors() {
    let msg = |src: &str| parse_document(src).unwrap_err().to_string();
    assert!(msg("]").contains("unmatched `]`"));
    assert!(msg("#[ #rect()").contains("unclosed scope"));
    assert!(msg("#rect[abc").contains("unclosed body"));
    assert!(msg("hello").contains("unexpected text"));
    assert!(msg("#box()").contains("unknown function `box`"));
    assert!(msg("#set box(fill: red)").contains("set rules only apply to `rect`"));
}

#[test]
fn single_call_rejects_trailing_text() {
    assert!(parse_rect_call("rect() extra").is_err());
    assert!(parse_rect_call("#rect()").is_ok());
    assert!(parse_rect_call("box()").is_err());
}
