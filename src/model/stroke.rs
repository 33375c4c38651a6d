use crate::foundation::{color::Color, units::Length};

/// Default stroke thickness in points.
pub const DEFAULT_STROKE_THICKNESS_PT: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A stroke as written: either part may be left out and takes its default.
///
/// `red` sets only the paint, `2pt` only the thickness, `2pt + red` both.
pub struct PartialStroke {
    /// Stroke color; defaults to black.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint: Option<Color>,
    /// Stroke thickness; defaults to 1pt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Length>,
}

impl PartialStroke {
    pub fn paint(color: Color) -> Self {
        Self {
            paint: Some(color),
            thickness: None,
        }
    }

    pub fn thickness(thickness: Length) -> Self {
        Self {
            paint: None,
            thickness: Some(thickness),
        }
    }

    /// Fill in the parts missing from `self` with `other`'s.
    pub fn or(self, other: PartialStroke) -> Self {
        Self {
            paint: self.paint.or(other.paint),
            thickness: self.thickness.or(other.thickness),
        }
    }

    /// Apply defaults.
    pub fn resolve(self) -> Stroke {
        Stroke {
            paint: self.paint.unwrap_or(Color::BLACK),
            thickness: self
                .thickness
                .map(Length::to_pt)
                .unwrap_or(DEFAULT_STROKE_THICKNESS_PT)
                .max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fully resolved stroke.
pub struct Stroke {
    /// Stroke color.
    pub paint: Color,
    /// Thickness in points, never negative.
    pub thickness: f64,
}

impl Stroke {
    /// Stroke of the given thickness in points, painted black.
    pub fn new(thickness: f64) -> Self {
        Self {
            paint: Color::BLACK,
            thickness,
        }
    }

    /// Whether the stroke would paint anything.
    pub fn is_visible(&self) -> bool {
        self.thickness > 0.0 && self.paint.a > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/stroke.rs"]
mod tests;
