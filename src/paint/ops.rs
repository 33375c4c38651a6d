use crate::foundation::{
    color::Color,
    core::{BezPath, Corner, Sides},
};
use crate::model::stroke::Stroke;
use crate::paint::shape::RoundedBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// How an open stroke ends.
pub enum LineCap {
    /// Flat, flush with the path's end.
    Butt,
    /// Flat, extended by half the stroke thickness.
    Square,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// A paint instruction in box-local coordinates (points, y down, origin at
/// the top-left of the layout box).
pub enum PaintOp {
    /// Fill a closed path.
    Fill {
        #[serde(serialize_with = "svg_path")]
        path: BezPath,
        color: Color,
    },
    /// Stroke a path, centered on it.
    Stroke {
        #[serde(serialize_with = "svg_path")]
        path: BezPath,
        stroke: Stroke,
        /// Whether `path` is a closed outline (caps then do not apply).
        closed: bool,
        start_cap: LineCap,
        end_cap: LineCap,
    },
    /// Restrict following ops to the inside of a closed path.
    PushClip {
        #[serde(serialize_with = "svg_path")]
        path: BezPath,
    },
    /// End the innermost clip.
    PopClip,
}

fn svg_path<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

/// Paint instructions for a decorated box.
///
/// Radii are clamped to the box first. The fill covers the rounded outline.
/// Equal strokes on all four edges become one closed stroke; otherwise each
/// stroked edge is its own open path. Edge strokes sharing a fill are clipped
/// to the outline grown by half the thickest stroke, which trims square caps
/// poking out of sharp corners.
pub fn emit(shape: &RoundedBox, fill: Option<Color>, strokes: &Sides<Option<Stroke>>) -> Vec<PaintOp> {
    let shape = &shape.clamped();
    let mut ops = Vec::new();
    let outline = shape.outline();

    if let Some(color) = fill {
        ops.push(PaintOp::Fill {
            path: outline.clone(),
            color,
        });
    }

    let visible = strokes.map(|s| s.filter(Stroke::is_visible));
    if visible.is_uniform() {
        if let Some(stroke) = visible.top {
            ops.push(PaintOp::Stroke {
                path: outline,
                stroke,
                closed: true,
                start_cap: LineCap::Butt,
                end_cap: LineCap::Butt,
            });
        }
        return ops;
    }

    let clip = fill.is_some();
    if clip {
        let half = visible
            .iter()
            .filter_map(|(_, s)| s.map(|s| s.thickness))
            .fold(0.0, f64::max)
            / 2.0;
        tracing::debug!(half, "clipping per-edge strokes to grown outline");
        ops.push(PaintOp::PushClip {
            path: shape.grow(half).outline(),
        });
    }

    for (side, stroke) in visible.iter() {
        let Some(stroke) = *stroke else { continue };
        ops.push(PaintOp::Stroke {
            path: shape.edge(side),
            stroke,
            closed: false,
            start_cap: cap_at(shape, side.start_corner()),
            end_cap: cap_at(shape, side.end_corner()),
        });
    }

    if clip {
        ops.push(PaintOp::PopClip);
    }
    ops
}

/// Square caps close the notch where two edges meet at a sharp corner.
fn cap_at(shape: &RoundedBox, corner: Corner) -> LineCap {
    if shape.is_rounded(corner) {
        LineCap::Butt
    } else {
        LineCap::Square
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/ops.rs"]
mod tests;
