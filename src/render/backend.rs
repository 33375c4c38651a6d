use std::path::Path;

use crate::{
    config::LayoutConfig,
    foundation::error::{RectError, RectResult},
    layout::flow::Page,
};

/// A rendered page as RGBA8 pixels.
///
/// Renderers produce **premultiplied alpha**; the `premultiplied` flag makes
/// this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 at pixel `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }

    /// Pixel bytes with straight alpha, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 0 {
                px[..3].fill(0);
            } else if a < 255 {
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8;
                }
            }
        }
        out
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> RectResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                RectError::render(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| RectError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// A renderer that rasterizes a laid-out [`Page`].
pub trait RenderBackend {
    /// Paint every box on `page` and read back the pixels.
    fn render_page(&mut self, page: &Page) -> RectResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// If set, backends clear the target to this straight-alpha RGBA8 color
    /// before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Output pixels per point.
    pub px_per_pt: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            px_per_pt: 1.0,
        }
    }
}

impl From<&LayoutConfig> for RenderSettings {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            clear_rgba: Some(config.background_rgba8),
            px_per_pt: config.px_per_pt,
        }
    }
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> RectResult<Box<dyn RenderBackend>> {
    if !settings.px_per_pt.is_finite() || settings.px_per_pt <= 0.0 {
        return Err(RectError::validation("px_per_pt must be finite and > 0"));
    }
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}

/// Render `page` on the CPU with the background and scale from `config`.
pub fn render_page(page: &Page, config: &LayoutConfig) -> RectResult<FrameRGBA> {
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::from(config))?;
    backend.render_page(page)
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
