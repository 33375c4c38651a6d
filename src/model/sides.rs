//! Authored forms of the mapping-valued parameters.
//!
//! `stroke`, `inset` and `outset` take a [`SidesValue`]; `radius` takes a
//! [`CornersValue`]. Both are validated when built from source, so every
//! value of these types only holds recognized keys.

use crate::foundation::core::{Axes, Corners, Sides};

/// Keys accepted by every mapping-valued parameter.
pub const MAPPING_KEYS: &[&str] = &["x", "y", "left", "top", "right", "bottom"];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// A per-edge parameter: one value for all edges, per axis, or per edge.
pub enum SidesValue<T> {
    /// Same value on all four edges.
    Uniform(T),
    /// `x` applies to left and right, `y` to top and bottom.
    Axes(Axes<Option<T>>),
    /// Individual edges. Any `x`/`y` entries written alongside have already
    /// been folded in as fallbacks.
    Edges(Sides<Option<T>>),
}

impl<T: Clone> SidesValue<T> {
    /// Build from mapping entries. Axis entries fill edges the mapping leaves
    /// unset, so the result does not depend on key order.
    pub fn from_entries(axes: Axes<Option<T>>, edges: Sides<Option<T>>) -> Self {
        let has_edges = edges.left.is_some()
            || edges.top.is_some()
            || edges.right.is_some()
            || edges.bottom.is_some();
        if !has_edges {
            return SidesValue::Axes(axes);
        }
        SidesValue::Edges(Sides {
            left: edges.left.or_else(|| axes.x.clone()),
            top: edges.top.or_else(|| axes.y.clone()),
            right: edges.right.or_else(|| axes.x.clone()),
            bottom: edges.bottom.or(axes.y),
        })
    }

    /// Expand into one optional value per edge.
    pub fn to_sides(&self) -> Sides<Option<T>> {
        match self {
            SidesValue::Uniform(v) => Sides::splat(Some(v.clone())),
            SidesValue::Axes(axes) => Sides {
                left: axes.x.clone(),
                top: axes.y.clone(),
                right: axes.x.clone(),
                bottom: axes.y.clone(),
            },
            SidesValue::Edges(sides) => sides.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// A per-corner parameter: one value for all corners, per axis, or per corner.
///
/// Per-corner keys name corners clockwise: `left` is the top-left corner,
/// `top` the top-right, `right` the bottom-right and `bottom` the bottom-left.
pub enum CornersValue<T> {
    /// Same value for both components of every corner.
    Uniform(T),
    /// `x` is every corner's horizontal component, `y` its vertical one.
    Axes(Axes<Option<T>>),
    /// Individual corners, each with both components.
    Corners(Corners<Axes<Option<T>>>),
}

impl<T: Clone> CornersValue<T> {
    /// Build from mapping entries. A named corner sets both of its components
    /// and wins over `x`/`y` entries.
    pub fn from_entries(axes: Axes<Option<T>>, corners: Corners<Option<T>>) -> Self {
        let has_corners = corners.top_left.is_some()
            || corners.top_right.is_some()
            || corners.bottom_right.is_some()
            || corners.bottom_left.is_some();
        if !has_corners {
            return CornersValue::Axes(axes);
        }
        CornersValue::Corners(corners.map(|v| match v {
            Some(v) => Axes::splat(Some(v)),
            None => axes.clone(),
        }))
    }

    /// Expand into per-corner, per-axis optional values.
    pub fn to_corners(&self) -> Corners<Axes<Option<T>>> {
        match self {
            CornersValue::Uniform(v) => Corners::splat(Axes::splat(Some(v.clone()))),
            CornersValue::Axes(axes) => Corners::splat(axes.clone()),
            CornersValue::Corners(corners) => corners.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/sides.rs"]
mod tests;
