use super::*;
use crate::syntax::parser::Parser;

fn value(src: &str) -> RectResult<Value> {
    let expr = Parser::new(src, 0).parse_expr()?;
    Ok(eval(&expr)?.v)
}

#[test]
fn numerics_by_unit() {
    assert_eq!(value("3").unwrap(), Value::Float(3.0));
    assert_eq!(value("50%").unwrap(), Value::Ratio(Ratio::percent(50.0)));
    assert_eq!(value("2cm").unwrap(), Value::Length(Length::cm(2.0)));
    assert!(value("2em").unwrap_err().to_string().contains("unknown unit `em`"));
}

#[test]
fn identifiers() {
    assert_eq!(value("none").unwrap(), Value::None);
    assert_eq!(value("auto").unwrap(), Value::Auto);
    assert_eq!(
        value("purple").unwrap(),
        Value::Color(Color::rgb(0xb1, 0x0d, 0xc9))
    );
    assert!(value("cake").unwrap_err().to_string().contains("unknown variable: cake"));
}

#[test]
fn length_plus_color_is_a_stroke() {
    let expected = Value::Stroke(PartialStroke {
        paint: Some(Color::named("red").unwrap()),
        thickness: Some(Length::pt(2.0)),
    });
    assert_eq!(value("2pt + red").unwrap(), expected);
    assert_eq!(value("red + 2pt").unwrap(), expected);
}

#[test]
fn mixed_lengths_become_relative() {
    assert_eq!(
        value("50% + 2pt").unwrap(),
        Value::Relative(Rel {
            abs: Length::pt(2.0),
            rel: Ratio(0.5),
        })
    );
    assert_eq!(value("-3pt").unwrap(), Value::Length(Length::pt(-3.0)));
    assert!(value("red + red").unwrap_err().to_string().contains("cannot add color and color"));
}

#[test]
fn color_constructors() {
    assert_eq!(value(r##"rgb("#ff0000")"##).unwrap(), Value::Color(Color::rgb(255, 0, 0)));
    assert_eq!(value("rgb(1, 2, 3)").unwrap(), Value::Color(Color::rgb(1, 2, 3)));
    assert_eq!(
        value("rgb(255, 0, 0, 50%)").unwrap(),
        Value::Color(Color::rgba(255, 0, 0, 128))
    );
    assert_eq!(value("luma(100%)").unwrap(), Value::Color(Color::luma(255)));
    assert!(value("rgb(300, 0, 0)").is_err());
    assert!(value("rgb(1, 2)").unwrap_err().to_string().contains("wrong number"));
    assert!(matches!(
        value("rgb(r: 1)").unwrap_err(),
        RectError::UnexpectedArgument { .. }
    ));
}

#[test]
fn dictionaries_keep_entry_spans() {
    let Value::Dict(entries) = value("(x: 5pt, y: 1pt)").unwrap() else {
        panic!("expected dict");
    };
    assert_eq!(entries[0].0.v, "x");
    assert_eq!(entries[0].0.span, Span::new(1, 2));
    assert_eq!(entries[1].1.v, Value::Length(Length::pt(1.0)));
}
