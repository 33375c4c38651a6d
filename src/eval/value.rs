use crate::foundation::{
    color::Color,
    error::{RectError, RectResult},
    span::{Span, Spanned},
    units::{Length, Ratio, Rel},
};
use crate::model::stroke::PartialStroke;
use crate::syntax::ast::{Arg, Expr};

/// A runtime value produced by evaluating an argument expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    None,
    Auto,
    Bool(bool),
    Float(f64),
    Length(Length),
    Ratio(Ratio),
    Relative(Rel),
    Color(Color),
    Stroke(PartialStroke),
    Str(String),
    Dict(Vec<(Spanned<String>, Spanned<Value>)>),
}

impl Value {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Auto => "auto",
            Value::Bool(_) => "boolean",
            Value::Float(_) => "float",
            Value::Length(_) => "length",
            Value::Ratio(_) => "ratio",
            Value::Relative(_) => "relative length",
            Value::Color(_) => "color",
            Value::Stroke(_) => "stroke",
            Value::Str(_) => "string",
            Value::Dict(_) => "dictionary",
        }
    }

    /// The value as a relative length, if it is one of the length kinds.
    pub(crate) fn as_rel(&self) -> Option<Rel> {
        match *self {
            Value::Length(l) => Some(l.into()),
            Value::Ratio(r) => Some(r.into()),
            Value::Relative(rel) => Some(rel),
            _ => None,
        }
    }
}

pub(crate) fn eval(expr: &Spanned<Expr>) -> RectResult<Spanned<Value>> {
    let span = expr.span;
    let v = match &expr.v {
        Expr::Numeric(v, unit) => numeric(*v, unit, span)?,
        Expr::Str(s) => Value::Str(s.clone()),
        Expr::Ident(name) => ident(name, span)?,
        Expr::Dict(entries) => Value::Dict(
            entries
                .iter()
                .map(|e| Ok((e.key.clone(), eval(&e.value)?)))
                .collect::<RectResult<_>>()?,
        ),
        Expr::Call { callee, args } => call(callee, args, span)?,
        Expr::Neg(inner) => neg(eval(inner)?)?,
        Expr::Add(a, b) => add(eval(a)?, eval(b)?, span)?,
    };
    Ok(Spanned::new(v, span))
}

fn numeric(v: f64, unit: &str, span: Span) -> RectResult<Value> {
    if unit.is_empty() {
        return Ok(Value::Float(v));
    }
    if unit == "%" {
        return Ok(Value::Ratio(Ratio::percent(v)));
    }
    Length::with_unit(v, unit)
        .map(Value::Length)
        .ok_or_else(|| RectError::syntax(format!("unknown unit `{unit}`"), span))
}

fn ident(name: &str, span: Span) -> RectResult<Value> {
    Ok(match name {
        "none" => Value::None,
        "auto" => Value::Auto,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Color(
            Color::named(name)
                .ok_or_else(|| RectError::syntax(format!("unknown variable: {name}"), span))?,
        ),
    })
}

fn call(callee: &Spanned<String>, args: &[Arg], span: Span) -> RectResult<Value> {
    if let Some(named) = args.iter().find_map(|a| a.name.as_ref()) {
        return Err(RectError::UnexpectedArgument {
            name: named.v.clone(),
            span: named.span,
        });
    }
    let values = args
        .iter()
        .map(|a| eval(&a.value))
        .collect::<RectResult<Vec<_>>>()?;

    match (callee.v.as_str(), values.as_slice()) {
        ("rgb", [hex]) => match &hex.v {
            Value::Str(s) => Color::from_hex(s)
                .map(Value::Color)
                .ok_or_else(|| RectError::syntax("invalid hex color", hex.span)),
            other => Err(RectError::type_mismatch("string", other.type_name(), hex.span)),
        },
        ("rgb", [r, g, b]) => Ok(Value::Color(Color::rgb(
            channel(r)?,
            channel(g)?,
            channel(b)?,
        ))),
        ("rgb", [r, g, b, a]) => Ok(Value::Color(Color::rgba(
            channel(r)?,
            channel(g)?,
            channel(b)?,
            channel(a)?,
        ))),
        ("luma", [v]) => Ok(Value::Color(Color::luma(channel(v)?))),
        ("rgb" | "luma", _) => Err(RectError::syntax(
            format!("wrong number of arguments to `{}`", callee.v),
            span,
        )),
        (other, _) => Err(RectError::syntax(
            format!("unknown function `{other}`"),
            callee.span,
        )),
    }
}

/// A color channel: an integer in `0..=255` or a ratio.
fn channel(v: &Spanned<Value>) -> RectResult<u8> {
    let out_of_range = || RectError::syntax("color channel out of range", v.span);
    match v.v {
        Value::Float(f) if f.fract() == 0.0 && (0.0..=255.0).contains(&f) => Ok(f as u8),
        Value::Float(_) => Err(out_of_range()),
        Value::Ratio(r) if (0.0..=1.0).contains(&r.0) => Ok((r.0 * 255.0).round() as u8),
        Value::Ratio(_) => Err(out_of_range()),
        ref other => Err(RectError::type_mismatch(
            "integer or ratio",
            other.type_name(),
            v.span,
        )),
    }
}

fn neg(v: Spanned<Value>) -> RectResult<Value> {
    match v.v {
        Value::Float(f) => Ok(Value::Float(-f)),
        Value::Length(l) => Ok(Value::Length(-l)),
        Value::Ratio(r) => Ok(Value::Ratio(Ratio(-r.0))),
        Value::Relative(rel) => Ok(Value::Relative(Rel {
            abs: -rel.abs,
            rel: Ratio(-rel.rel.0),
        })),
        ref other => Err(RectError::type_mismatch(
            "number or length",
            other.type_name(),
            v.span,
        )),
    }
}

fn add(a: Spanned<Value>, b: Spanned<Value>, span: Span) -> RectResult<Value> {
    Ok(match (a.v, b.v) {
        (Value::Float(x), Value::Float(y)) => Value::Float(x + y),
        (Value::Length(x), Value::Length(y)) => Value::Length(x + y),
        (Value::Length(l), Value::Color(c)) | (Value::Color(c), Value::Length(l)) => {
            Value::Stroke(PartialStroke {
                paint: Some(c),
                thickness: Some(l),
            })
        }
        (x, y) => match (x.as_rel(), y.as_rel()) {
            (Some(x), Some(y)) => Value::Relative(x + y),
            _ => {
                return Err(RectError::syntax(
                    format!("cannot add {} and {}", x.type_name(), y.type_name()),
                    span,
                ));
            }
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/value.rs"]
mod tests;
