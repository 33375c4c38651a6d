use crate::{
    foundation::{
        color::Color,
        units::{Rel, Sizing},
    },
    model::{
        sides::{CornersValue, SidesValue},
        spec::{RectSpec, RectStyle},
        stroke::PartialStroke,
    },
};

/// Programmatic construction of a [`RectSpec`].
///
/// Mirrors the argument syntax: `RectBuilder::new().width(Length::cm(2.0))
/// .fill(Color::named("purple")).inset_all(Length::pt(5.0).into())
/// .body("text").build()`.
#[derive(Clone, Debug, Default)]
pub struct RectBuilder {
    style: RectStyle,
    body: Option<String>,
}

impl RectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: impl Into<Sizing>) -> Self {
        self.style.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Sizing>) -> Self {
        self.style.height = Some(height.into());
        self
    }

    pub fn fill(mut self, fill: Option<Color>) -> Self {
        self.style.fill = Some(fill);
        self
    }

    pub fn stroke(mut self, stroke: SidesValue<Option<PartialStroke>>) -> Self {
        self.style.stroke = Some(stroke);
        self
    }

    pub fn stroke_all(self, stroke: PartialStroke) -> Self {
        self.stroke(SidesValue::Uniform(Some(stroke)))
    }

    pub fn radius(mut self, radius: CornersValue<Rel>) -> Self {
        self.style.radius = Some(radius);
        self
    }

    pub fn radius_all(self, radius: Rel) -> Self {
        self.radius(CornersValue::Uniform(radius))
    }

    pub fn inset(mut self, inset: SidesValue<Rel>) -> Self {
        self.style.inset = Some(inset);
        self
    }

    pub fn inset_all(self, inset: Rel) -> Self {
        self.inset(SidesValue::Uniform(inset))
    }

    pub fn outset(mut self, outset: SidesValue<Rel>) -> Self {
        self.style.outset = Some(outset);
        self
    }

    pub fn outset_all(self, outset: Rel) -> Self {
        self.outset(SidesValue::Uniform(outset))
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> RectSpec {
        RectSpec {
            style: self.style,
            body: self.body,
        }
    }

    /// Build only the styleable part, for use as a set rule.
    pub fn build_style(self) -> RectStyle {
        self.style
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/dsl.rs"]
mod tests;
