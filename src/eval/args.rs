use std::collections::HashSet;

use crate::eval::{cast, value::{Value, eval}};
use crate::foundation::{
    error::{RectError, RectResult},
    span::Spanned,
};
use crate::model::spec::RectStyle;
use crate::syntax::ast::Arg;

/// Named parameters `rect` accepts.
pub(crate) const RECT_PARAMS: &[&str] = &[
    "width", "height", "fill", "stroke", "radius", "inset", "outset",
];

/// Cast a call's arguments into styleable parameters plus an optional
/// positional string body. Set rules pass `allow_body = false`.
pub(crate) fn rect_args(
    args: &[Arg],
    allow_body: bool,
) -> RectResult<(RectStyle, Option<Spanned<String>>)> {
    let mut style = RectStyle::default();
    let mut body = None;
    let mut seen = HashSet::new();

    for arg in args {
        let value = eval(&arg.value)?;
        let Some(name) = &arg.name else {
            match value.v {
                Value::Str(text) if allow_body && body.is_none() => {
                    body = Some(Spanned::new(text, value.span));
                    continue;
                }
                _ => {
                    return Err(RectError::syntax(
                        "unexpected positional argument",
                        value.span,
                    ));
                }
            }
        };

        if !RECT_PARAMS.contains(&name.v.as_str()) {
            return Err(RectError::UnexpectedArgument {
                name: name.v.clone(),
                span: name.span,
            });
        }
        if !seen.insert(name.v.as_str()) {
            return Err(RectError::DuplicateArgument {
                name: name.v.clone(),
                span: name.span,
            });
        }

        match name.v.as_str() {
            "width" => style.width = Some(cast::sizing(&value)?),
            "height" => style.height = Some(cast::sizing(&value)?),
            "fill" => style.fill = Some(cast::fill(&value)?),
            "stroke" => style.stroke = Some(cast::sides(&value, cast::stroke)?),
            "radius" => style.radius = Some(cast::corners(&value, cast::rel)?),
            "inset" => style.inset = Some(cast::sides(&value, cast::rel)?),
            "outset" => style.outset = Some(cast::sides(&value, cast::rel)?),
            _ => {}
        }
    }

    Ok((style, body))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/args.rs"]
mod tests;
