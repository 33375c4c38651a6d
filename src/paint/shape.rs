//! Rounded-rectangle outlines with elliptical corners.
//!
//! Corners are quarter ellipses approximated by one cubic each. The outline
//! runs clockwise (in y-down coordinates) starting at the end of the top-left
//! arc, so every edge can also be cut out on its own between the midpoints
//! of its two corner arcs.

use kurbo::{CubicBez, ParamCurve};

use crate::foundation::core::{Axes, BezPath, Corner, Corners, Point, Rect, Side};

/// Control-point distance for a quarter circle, as a fraction of the radius.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// A rectangle with per-corner elliptical radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedBox {
    pub rect: Rect,
    pub radii: Corners<Axes<f64>>,
}

impl RoundedBox {
    pub fn new(rect: Rect, radii: Corners<Axes<f64>>) -> Self {
        Self { rect, radii }
    }

    /// Same shape with no radius component larger than half the box on its
    /// axis.
    pub fn clamped(&self) -> Self {
        let half = Axes::new(self.rect.width() / 2.0, self.rect.height() / 2.0);
        let radii = self
            .radii
            .map(|r| Axes::new(r.x.max(0.0).min(half.x), r.y.max(0.0).min(half.y)));
        if radii != self.radii {
            tracing::debug!(?half, "corner radii clamped to half the box");
        }
        Self {
            rect: self.rect,
            radii,
        }
    }

    /// Same shape grown outward by `d` on every side. Rounded corners grow
    /// their radii by `d`; sharp corners stay sharp.
    pub fn grow(&self, d: f64) -> Self {
        Self {
            rect: self.rect.inflate(d, d),
            radii: self.radii.map(|r| {
                if r.x > 0.0 && r.y > 0.0 {
                    Axes::new(r.x + d, r.y + d)
                } else {
                    r
                }
            }),
        }
    }

    /// Whether the corner has a visible rounding.
    pub fn is_rounded(&self, corner: Corner) -> bool {
        let r = self.radii.get(corner);
        r.x > 0.0 && r.y > 0.0
    }

    /// Quarter-ellipse arc of `corner`, from the end of the previous edge to
    /// the start of the next one (clockwise).
    fn arc(&self, corner: Corner) -> CubicBez {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let r = *self.radii.get(corner);
        let (c, p0, p3) = match corner {
            Corner::TopLeft => (
                Point::new(x0, y0),
                Point::new(x0, y0 + r.y),
                Point::new(x0 + r.x, y0),
            ),
            Corner::TopRight => (
                Point::new(x1, y0),
                Point::new(x1 - r.x, y0),
                Point::new(x1, y0 + r.y),
            ),
            Corner::BottomRight => (
                Point::new(x1, y1),
                Point::new(x1, y1 - r.y),
                Point::new(x1 - r.x, y1),
            ),
            Corner::BottomLeft => (
                Point::new(x0, y1),
                Point::new(x0 + r.x, y1),
                Point::new(x0, y1 - r.y),
            ),
        };
        CubicBez::new(p0, p0.lerp(c, KAPPA), p3.lerp(c, KAPPA), p3)
    }

    /// Closed outline of the whole box.
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.arc(Corner::TopLeft).p3);
        for corner in [
            Corner::TopRight,
            Corner::BottomRight,
            Corner::BottomLeft,
            Corner::TopLeft,
        ] {
            let arc = self.arc(corner);
            path.line_to(arc.p0);
            if self.is_rounded(corner) {
                path.curve_to(arc.p1, arc.p2, arc.p3);
            } else if arc.p3 != arc.p0 {
                path.line_to(arc.p3);
            }
        }
        path.close_path();
        path
    }

    /// Open path of one edge, from the midpoint of its starting corner arc to
    /// the midpoint of its ending corner arc.
    pub fn edge(&self, side: Side) -> BezPath {
        let (_, start_half) = self.arc(side.start_corner()).subdivide();
        let (end_half, _) = self.arc(side.end_corner()).subdivide();

        let mut path = BezPath::new();
        path.move_to(start_half.p0);
        path.curve_to(start_half.p1, start_half.p2, start_half.p3);
        path.line_to(end_half.p0);
        path.curve_to(end_half.p1, end_half.p2, end_half.p3);
        path
    }

    /// Point on the outline at the middle of `corner`'s arc.
    pub fn corner_midpoint(&self, corner: Corner) -> Point {
        self.arc(corner).eval(0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/shape.rs"]
mod tests;
