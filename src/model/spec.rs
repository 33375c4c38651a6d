use crate::{
    foundation::{
        color::Color,
        units::{Rel, Sizing},
    },
    model::{
        sides::{CornersValue, SidesValue},
        stroke::PartialStroke,
    },
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The styleable parameters of a rectangle.
///
/// Every field is optional: `None` means "not given here", so the value is
/// looked up further out in the [`crate::StyleChain`]. A value that is given
/// always replaces the inherited one as a whole, mappings included.
pub struct RectStyle {
    /// Box width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Sizing>,
    /// Box height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Sizing>,
    /// Fill color. `Some(None)` is an explicit `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Option<Color>>,
    /// Edge strokes; a `None` entry is an explicit `none` for that edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<SidesValue<Option<PartialStroke>>>,
    /// Corner radii.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<CornersValue<Rel>>,
    /// Spacing between the border and the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inset: Option<SidesValue<Rel>>,
    /// Expansion of the painted area beyond the layout size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outset: Option<SidesValue<Rel>>,
}

impl RectStyle {
    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        *self == RectStyle::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rectangle invocation: its parameters plus optional inline body.
///
/// A spec is built per call, merged with inherited defaults via
/// [`crate::StyleChain::materialize`], then resolved once by
/// [`crate::resolve_rect`].
pub struct RectSpec {
    /// Styleable parameters.
    #[serde(flatten)]
    pub style: RectStyle,
    /// Inline body content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RectSpec {
    pub fn new() -> Self {
        Self::default()
    }
}
