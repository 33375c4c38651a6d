use crate::foundation::{
    core::{Point, Rect},
    span::Span,
};
use crate::layout::rect::ResolvedBox;

/// A resolved box positioned on a page.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PlacedBox {
    /// Top-left of the layout box, in page points.
    pub origin: Point,
    /// The resolved box, in box-local coordinates.
    pub resolved: ResolvedBox,
    /// Source span of the `rect` call this box came from.
    pub span: Span,
}

impl PlacedBox {
    /// Painted area in page coordinates.
    pub fn page_bounds(&self) -> Rect {
        self.resolved.bounds + self.origin.to_vec2()
    }
}

/// Boxes stacked on a single page.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Page {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Boxes in document order.
    pub boxes: Vec<PlacedBox>,
}

/// Stack boxes top to bottom at the left margin, `gap` apart.
///
/// Outsets paint outside the layout box and do not take up flow space. With
/// no fixed `height` the page grows to fit its boxes plus both margins.
pub fn flow(
    boxes: Vec<(ResolvedBox, Span)>,
    width: f64,
    height: Option<f64>,
    margin: f64,
    gap: f64,
) -> Page {
    let mut y = margin;
    let mut placed = Vec::with_capacity(boxes.len());
    for (i, (resolved, span)) in boxes.into_iter().enumerate() {
        if i > 0 {
            y += gap;
        }
        let origin = Point::new(margin, y);
        y += resolved.height;
        placed.push(PlacedBox {
            origin,
            resolved,
            span,
        });
    }

    let height = height.unwrap_or(y + margin);
    if placed.last().is_some_and(|b| b.origin.y + b.resolved.height > height) {
        tracing::debug!(height, content = y, "boxes overflow the page");
    }
    Page {
        width,
        height,
        boxes: placed,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
