use crate::eval::value::Value;
use crate::foundation::{
    color::Color,
    core::{Axes, Corners, Sides},
    error::{RectError, RectResult},
    span::Spanned,
    units::{Rel, Sizing},
};
use crate::model::{
    sides::{CornersValue, MAPPING_KEYS, SidesValue},
    stroke::PartialStroke,
};

pub(crate) fn sizing(v: &Spanned<Value>) -> RectResult<Sizing> {
    match &v.v {
        Value::Auto => Ok(Sizing::Auto),
        other => other.as_rel().map(Sizing::Rel).ok_or_else(|| {
            RectError::type_mismatch("auto or relative length", other.type_name(), v.span)
        }),
    }
}

pub(crate) fn rel(v: &Spanned<Value>) -> RectResult<Rel> {
    v.v.as_rel()
        .ok_or_else(|| RectError::type_mismatch("relative length", v.v.type_name(), v.span))
}

pub(crate) fn fill(v: &Spanned<Value>) -> RectResult<Option<Color>> {
    match v.v {
        Value::None => Ok(None),
        Value::Color(c) => Ok(Some(c)),
        ref other => Err(RectError::type_mismatch(
            "none or color",
            other.type_name(),
            v.span,
        )),
    }
}

/// One edge's stroke: `none`, a color, a length, or `length + color`.
pub(crate) fn stroke(v: &Spanned<Value>) -> RectResult<Option<PartialStroke>> {
    match v.v {
        Value::None => Ok(None),
        Value::Color(c) => Ok(Some(PartialStroke::paint(c))),
        Value::Length(l) => Ok(Some(PartialStroke::thickness(l))),
        Value::Stroke(s) => Ok(Some(s)),
        ref other => Err(RectError::type_mismatch(
            "none, color, length or stroke",
            other.type_name(),
            v.span,
        )),
    }
}

/// Entries of a mapping-valued parameter, sorted into axis and edge slots.
///
/// Fails on the first key outside [`MAPPING_KEYS`], regardless of what the
/// other keys are. A repeated key keeps its last value.
fn entries<T>(
    dict: &[(Spanned<String>, Spanned<Value>)],
    cast: &impl Fn(&Spanned<Value>) -> RectResult<T>,
) -> RectResult<(Axes<Option<T>>, Sides<Option<T>>)> {
    if let Some((key, _)) = dict
        .iter()
        .find(|(key, _)| !MAPPING_KEYS.contains(&key.v.as_str()))
    {
        return Err(RectError::invalid_key(&key.v, MAPPING_KEYS, key.span));
    }

    let mut axes = Axes::new(None, None);
    let mut sides = Sides::new(None, None, None, None);
    for (key, value) in dict {
        let value = Some(cast(value)?);
        match key.v.as_str() {
            "x" => axes.x = value,
            "y" => axes.y = value,
            "left" => sides.left = value,
            "top" => sides.top = value,
            "right" => sides.right = value,
            "bottom" => sides.bottom = value,
            _ => return Err(RectError::invalid_key(&key.v, MAPPING_KEYS, key.span)),
        }
    }
    Ok((axes, sides))
}

/// A scalar applies to every edge; a dictionary is keyed by axis or edge.
pub(crate) fn sides<T: Clone>(
    v: &Spanned<Value>,
    cast: impl Fn(&Spanned<Value>) -> RectResult<T>,
) -> RectResult<SidesValue<T>> {
    match &v.v {
        Value::Dict(dict) => {
            let (axes, sides) = entries(dict, &cast)?;
            Ok(SidesValue::from_entries(axes, sides))
        }
        _ => Ok(SidesValue::Uniform(cast(v)?)),
    }
}

/// A scalar applies to every corner; a dictionary is keyed by axis or by
/// corner, with corners named clockwise from the top left.
pub(crate) fn corners<T: Clone>(
    v: &Spanned<Value>,
    cast: impl Fn(&Spanned<Value>) -> RectResult<T>,
) -> RectResult<CornersValue<T>> {
    match &v.v {
        Value::Dict(dict) => {
            let (axes, named) = entries(dict, &cast)?;
            let corners = Corners {
                top_left: named.left,
                top_right: named.top,
                bottom_right: named.right,
                bottom_left: named.bottom,
            };
            Ok(CornersValue::from_entries(axes, corners))
        }
        _ => Ok(CornersValue::Uniform(cast(v)?)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/cast.rs"]
mod tests;
