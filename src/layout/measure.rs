use std::sync::{Arc, Mutex, PoisonError};

use crate::foundation::{
    core::Size,
    error::{RectError, RectResult},
};

/// Measures inline body content.
///
/// Implementations must be `Sync`: independent boxes may be resolved in
/// parallel against a shared measurer.
pub trait Measure: Sync {
    /// Natural size of `body` in points when broken into lines no wider than
    /// `max_width` (unbounded when `None`). A single word wider than the
    /// limit overflows rather than being split.
    fn measure(&self, body: &str, max_width: Option<f64>) -> Size;
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Deterministic measurer: every character advances by the same amount.
pub struct MonoMeasure {
    /// Horizontal advance per character, in points.
    pub advance_pt: f64,
    /// Height of one line, in points.
    pub line_height_pt: f64,
}

impl MonoMeasure {
    /// Metrics for a font size: half-em advance, one-em lines.
    pub fn new(text_size_pt: f64) -> Self {
        Self {
            advance_pt: text_size_pt * 0.5,
            line_height_pt: text_size_pt,
        }
    }

    fn word_width(&self, word: &str) -> f64 {
        word.chars().count() as f64 * self.advance_pt
    }

    /// Greedy line breaking of one paragraph; returns `(widest, lines)`.
    fn wrap(&self, paragraph: &str, max_width: Option<f64>) -> (f64, usize) {
        let mut widest = 0.0f64;
        let mut lines = 1usize;
        let mut current = 0.0f64;
        for word in paragraph.split_whitespace() {
            let w = self.word_width(word);
            if current == 0.0 {
                current = w;
                continue;
            }
            let joined = current + self.advance_pt + w;
            match max_width {
                Some(limit) if joined > limit => {
                    widest = widest.max(current);
                    lines += 1;
                    current = w;
                }
                _ => current = joined,
            }
        }
        (widest.max(current), lines)
    }
}

impl Default for MonoMeasure {
    fn default() -> Self {
        Self::new(11.0)
    }
}

impl Measure for MonoMeasure {
    fn measure(&self, body: &str, max_width: Option<f64>) -> Size {
        let body = body.trim();
        if body.is_empty() {
            return Size::ZERO;
        }
        let mut width = 0.0f64;
        let mut lines = 0usize;
        for paragraph in body.lines() {
            let (w, n) = self.wrap(paragraph, max_width);
            width = width.max(w);
            lines += n;
        }
        Size::new(width, lines as f64 * self.line_height_pt)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

/// Measurer backed by Parley text layout over a user-supplied font.
///
/// The font is registered once; the font context is shared behind a lock and
/// layout contexts are built per measurement.
#[derive(Clone)]
pub struct FontMeasure {
    font_ctx: Arc<Mutex<parley::FontContext>>,
    family: String,
    size_pt: f32,
}

impl std::fmt::Debug for FontMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMeasure")
            .field("family", &self.family)
            .field("size_pt", &self.size_pt)
            .finish()
    }
}

impl FontMeasure {
    /// Register `font_bytes` and measure at `size_pt`.
    pub fn from_font_bytes(font_bytes: Vec<u8>, size_pt: f32) -> RectResult<Self> {
        if !size_pt.is_finite() || size_pt <= 0.0 {
            return Err(RectError::validation(
                "text size must be finite and > 0",
            ));
        }
        let mut font_ctx = parley::FontContext::default();
        let family = register_family(&mut font_ctx, font_bytes)?;
        Ok(Self {
            font_ctx: Arc::new(Mutex::new(font_ctx)),
            family,
            size_pt,
        })
    }

    /// Family name found in the font data.
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl Measure for FontMeasure {
    fn measure(&self, body: &str, max_width: Option<f64>) -> Size {
        let body = body.trim();
        if body.is_empty() {
            return Size::ZERO;
        }
        // The collection is only written in `from_font_bytes`, so a poisoned
        // lock still guards a usable context.
        let mut font_ctx = self
            .font_ctx
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut layout_ctx = parley::LayoutContext::<MeasureBrush>::new();

        let mut builder = layout_ctx.ranged_builder(&mut *font_ctx, body, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Borrowed(self.family.as_str())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_pt));
        let mut layout: parley::Layout<MeasureBrush> = builder.build(body);
        layout.break_all_lines(max_width.map(|w| w as f32));

        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        Size::new(w, h)
    }
}

fn register_family(font_ctx: &mut parley::FontContext, font_bytes: Vec<u8>) -> RectResult<String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(font_bytes), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| RectError::validation("no font families registered from font bytes"))?;
    Ok(font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| RectError::validation("registered font family has no name"))?
        .to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
