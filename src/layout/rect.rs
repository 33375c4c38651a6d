use rayon::prelude::*;

use crate::foundation::{
    color::Color,
    core::{Axes, Corners, Point, Rect, Region, Sides, Size},
    error::{RectError, RectResult},
    units::Rel,
};
use crate::layout::measure::Measure;
use crate::model::{
    sides::{CornersValue, SidesValue},
    spec::RectSpec,
    stroke::Stroke,
};
use crate::paint::{
    ops::{PaintOp, emit},
    shape::RoundedBox,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Body content placed inside a resolved box.
pub struct BodyFrame {
    /// The body text.
    pub text: String,
    /// Natural size reported by the measurer.
    pub natural: Size,
    /// Content box the body is laid into.
    pub area: Rect,
}

#[derive(Clone, Debug, serde::Serialize)]
/// A rectangle after resolution: final geometry plus paint instructions.
///
/// All coordinates are box-local points with the origin at the top-left of
/// the layout box.
pub struct ResolvedBox {
    /// Layout width.
    pub width: f64,
    /// Layout height.
    pub height: f64,
    /// Per-corner radii, horizontal and vertical, as given. Painting clamps
    /// them to the box (see [`RoundedBox::clamped`]).
    pub radii: Corners<Axes<f64>>,
    /// Per-edge strokes; `None` paints nothing on that edge.
    pub strokes: Sides<Option<Stroke>>,
    /// Fill color.
    pub fill: Option<Color>,
    /// Resolved inset per edge.
    pub inset: Sides<f64>,
    /// Resolved outset per edge.
    pub outset: Sides<f64>,
    /// Padding box: the layout box shrunk by the inset, never negative.
    pub content: Rect,
    /// Painted area: the layout box expanded by the outset.
    pub bounds: Rect,
    /// Body placement, if the rect has a body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyFrame>,
    /// Paint instructions, in painting order.
    pub paint: Vec<PaintOp>,
}

impl ResolvedBox {
    /// Layout size (outset excluded).
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Resolve a rectangle spec into geometry and paint instructions.
///
/// `spec` should already carry inherited defaults (see
/// [`crate::StyleChain::materialize_spec`]); unset parameters take their
/// built-in defaults here: auto size, no fill, no stroke, zero radius, inset
/// and outset.
#[tracing::instrument(skip(spec, measure), fields(has_body = spec.body.is_some()))]
pub fn resolve_rect(
    spec: &RectSpec,
    region: Region,
    measure: &dyn Measure,
) -> RectResult<ResolvedBox> {
    check_region(region)?;
    let style = &spec.style;

    let inset = resolve_sides(
        style.inset.as_ref(),
        Axes::new(region.width, region.height.unwrap_or(0.0)),
        "inset",
    )?;

    let explicit_w = match style.width.and_then(|s| s.explicit()) {
        Some(rel) => Some(finite(rel.relative_to(region.width), "width")?),
        None => None,
    };

    let natural = match &spec.body {
        Some(body) => {
            let max_width = match explicit_w {
                Some(w) => Some((w - inset.sum_x()).max(0.0)),
                None if region.width > 0.0 => Some((region.width - inset.sum_x()).max(0.0)),
                None => None,
            };
            let size = measure.measure(body, max_width);
            Some((size, Size::new(size.width + inset.sum_x(), size.height + inset.sum_y())))
        }
        None => None,
    };
    let (natural_w, natural_h) = natural
        .map(|(_, outer)| (outer.width, outer.height))
        .unwrap_or((0.0, 0.0));

    let width = explicit_w.unwrap_or(natural_w);
    let height = match style.height.and_then(|s| s.explicit()) {
        Some(rel) => finite(
            rel.relative_to(region.height.unwrap_or(natural_h)),
            "height",
        )?,
        None => natural_h,
    };
    if width < 0.0 || height < 0.0 {
        tracing::debug!(width, height, "negative size clamped to zero");
    }
    let (width, height) = (width.max(0.0), height.max(0.0));

    let outset = resolve_sides(style.outset.as_ref(), Axes::new(width, height), "outset")?;
    let bounds = Rect::new(
        -outset.left,
        -outset.top,
        (width + outset.right).max(-outset.left),
        (height + outset.bottom).max(-outset.top),
    );

    let radii = resolve_radii(style.radius.as_ref(), bounds.size())?;
    let strokes = style
        .stroke
        .as_ref()
        .map(SidesValue::to_sides)
        .unwrap_or_default()
        .map(|s| s.flatten().map(|p| p.resolve()));
    let fill = style.fill.flatten();

    let content = content_box(width, height, &inset);
    let body = spec.body.as_ref().map(|text| BodyFrame {
        text: text.clone(),
        natural: natural.map(|(inner, _)| inner).unwrap_or(Size::ZERO),
        area: content,
    });

    let paint = emit(&RoundedBox::new(bounds, radii), fill, &strokes);

    Ok(ResolvedBox {
        width,
        height,
        radii,
        strokes,
        fill,
        inset,
        outset,
        content,
        bounds,
        body,
        paint,
    })
}

/// Resolve many specs against the same region in parallel, keeping order.
pub fn resolve_all(
    specs: &[RectSpec],
    region: Region,
    measure: &dyn Measure,
) -> RectResult<Vec<ResolvedBox>> {
    specs
        .par_iter()
        .map(|spec| resolve_rect(spec, region, measure))
        .collect()
}

fn check_region(region: Region) -> RectResult<()> {
    if !region.width.is_finite() || region.width < 0.0 {
        return Err(RectError::validation("region width must be finite and >= 0"));
    }
    if let Some(h) = region.height
        && (!h.is_finite() || h < 0.0)
    {
        return Err(RectError::validation("region height must be finite and >= 0"));
    }
    Ok(())
}

fn finite(v: f64, what: &str) -> RectResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RectError::validation(format!("{what} must be finite")))
    }
}

/// Horizontal sides resolve against `base.x`, vertical ones against `base.y`.
fn resolve_sides(
    value: Option<&SidesValue<Rel>>,
    base: Axes<f64>,
    what: &str,
) -> RectResult<Sides<f64>> {
    let sides = value.map(SidesValue::to_sides).unwrap_or_default();
    let resolve = |v: Option<Rel>, whole: f64| finite(v.map_or(0.0, |r| r.relative_to(whole)), what);
    Ok(Sides {
        left: resolve(sides.left, base.x)?,
        top: resolve(sides.top, base.y)?,
        right: resolve(sides.right, base.x)?,
        bottom: resolve(sides.bottom, base.y)?,
    })
}

/// Relative radii resolve against half the shorter side. Negative radii
/// become zero; oversized ones are kept and only clamped when painting.
fn resolve_radii(value: Option<&CornersValue<Rel>>, size: Size) -> RectResult<Corners<Axes<f64>>> {
    let base = (size.width / 2.0).min(size.height / 2.0);
    let corners = value.map(CornersValue::to_corners).unwrap_or_default();

    let resolve = |v: Option<Rel>| -> RectResult<f64> {
        Ok(finite(v.map_or(0.0, |r| r.relative_to(base)), "radius")?.max(0.0))
    };
    let corner = |c: Axes<Option<Rel>>| -> RectResult<Axes<f64>> {
        Ok(Axes::new(resolve(c.x)?, resolve(c.y)?))
    };
    Ok(Corners {
        top_left: corner(corners.top_left)?,
        top_right: corner(corners.top_right)?,
        bottom_right: corner(corners.bottom_right)?,
        bottom_left: corner(corners.bottom_left)?,
    })
}

fn content_box(width: f64, height: f64, inset: &Sides<f64>) -> Rect {
    let w = width - inset.sum_x();
    let h = height - inset.sum_y();
    if w < 0.0 || h < 0.0 {
        tracing::debug!(w, h, "inset exceeds box, content box clamped to zero");
    }
    let origin = Point::new(inset.left, inset.top);
    Rect::from_origin_size(origin, Size::new(w.max(0.0), h.max(0.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rect.rs"]
mod tests;
