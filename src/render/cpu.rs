use crate::{
    foundation::{
        color::Color,
        core::{Affine, BezPath, Point},
        error::{RectError, RectResult},
    },
    layout::flow::Page,
    paint::ops::{LineCap, PaintOp},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
};

/// CPU raster backend powered by `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RectResult<R>,
    ) -> RectResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, page), fields(boxes = page.boxes.len()))]
    fn render_page(&mut self, page: &Page) -> RectResult<FrameRGBA> {
        let scale = self.settings.px_per_pt;
        let width = surface_dim(page.width * scale, "width")?;
        let height = surface_dim(page.height * scale, "height")?;
        let clear = self.settings.clear_rgba;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |ctx| {
            if let Some([r, g, b, a]) = clear {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(width),
                    f64::from(height),
                ));
            }
            for placed in &page.boxes {
                let transform =
                    Affine::scale(scale) * Affine::translate(placed.origin.to_vec2());
                ctx.set_transform(affine_to_cpu(transform));
                let mut depth = 0usize;
                for op in &placed.resolved.paint {
                    draw_op(ctx, op, &mut depth)?;
                }
                for _ in 0..depth {
                    ctx.pop_layer();
                }
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn surface_dim(px: f64, what: &str) -> RectResult<u16> {
    let px = px.ceil();
    if !px.is_finite() || px < 1.0 {
        return Err(RectError::render(format!("page {what} rounds to zero pixels")));
    }
    if px > f64::from(u16::MAX) {
        return Err(RectError::render(format!("surface {what} exceeds u16")));
    }
    Ok(px as u16)
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &PaintOp, depth: &mut usize) -> RectResult<()> {
    match op {
        PaintOp::Fill { path, color } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        PaintOp::Stroke {
            path,
            stroke,
            closed,
            start_cap,
            end_cap,
        } => {
            let mut s = vello_cpu::kurbo::Stroke::new(stroke.thickness);
            s.join = vello_cpu::kurbo::Join::Miter;
            if !closed {
                s.start_cap = cap_to_cpu(*start_cap);
                s.end_cap = cap_to_cpu(*end_cap);
            }
            ctx.set_stroke(s);
            ctx.set_paint(color_to_cpu(stroke.paint));
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        PaintOp::PushClip { path } => {
            ctx.push_clip_layer(&bezpath_to_cpu(path));
            *depth += 1;
        }
        PaintOp::PopClip => {
            if *depth == 0 {
                return Err(RectError::render("clip pop without matching push"));
            }
            ctx.pop_layer();
            *depth -= 1;
        }
    }
    Ok(())
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn cap_to_cpu(cap: LineCap) -> vello_cpu::kurbo::Cap {
    match cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
