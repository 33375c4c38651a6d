use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Region,
    error::{RectError, RectResult},
};
use crate::model::spec::RectStyle;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Page and rendering settings for a document.
///
/// Every field has a default, so `{}` is a valid configuration file.
pub struct LayoutConfig {
    /// Page width in points (A4 by default).
    #[serde(default = "default_page_width_pt")]
    pub page_width_pt: f64,
    /// Fixed page height in points; when unset the page grows to fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height_pt: Option<f64>,
    /// Margin on all four sides, in points.
    #[serde(default = "default_margin_pt")]
    pub margin_pt: f64,
    /// Vertical space between stacked boxes, in points.
    #[serde(default = "default_gap_pt")]
    pub gap_pt: f64,
    /// Text size used by the built-in measurers, in points.
    #[serde(default = "default_text_size_pt")]
    pub text_size_pt: f64,
    /// Raster scale: output pixels per point.
    #[serde(default = "default_px_per_pt")]
    pub px_per_pt: f64,
    /// Page background, straight-alpha RGBA8.
    #[serde(default = "default_background_rgba8")]
    pub background_rgba8: [u8; 4],
    /// Outermost set rule, applied beneath any rule in the document.
    #[serde(default, skip_serializing_if = "RectStyle::is_empty")]
    pub defaults: RectStyle,
}

fn default_page_width_pt() -> f64 {
    595.28
}

fn default_margin_pt() -> f64 {
    20.0
}

fn default_gap_pt() -> f64 {
    10.0
}

fn default_text_size_pt() -> f64 {
    11.0
}

fn default_px_per_pt() -> f64 {
    1.0
}

fn default_background_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_pt: default_page_width_pt(),
            page_height_pt: None,
            margin_pt: default_margin_pt(),
            gap_pt: default_gap_pt(),
            text_size_pt: default_text_size_pt(),
            px_per_pt: default_px_per_pt(),
            background_rgba8: default_background_rgba8(),
            defaults: RectStyle::default(),
        }
    }
}

impl LayoutConfig {
    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> RectResult<Self> {
        let f = File::open(path).map_err(|e| {
            RectError::validation(format!("failed to open config '{}': {e}", path.display()))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| RectError::serde(format!("config '{}': {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json(json: &str) -> RectResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| RectError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields for finiteness and range.
    pub fn validate(&self) -> RectResult<()> {
        for (name, value) in [
            ("page_width_pt", self.page_width_pt),
            ("margin_pt", self.margin_pt),
            ("gap_pt", self.gap_pt),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RectError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if let Some(h) = self.page_height_pt
            && (!h.is_finite() || h < 0.0)
        {
            return Err(RectError::validation("page_height_pt must be finite and >= 0"));
        }
        for (name, value) in [
            ("text_size_pt", self.text_size_pt),
            ("px_per_pt", self.px_per_pt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RectError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if 2.0 * self.margin_pt > self.page_width_pt {
            return Err(RectError::validation(
                "margins leave no room on the page (2 * margin_pt > page_width_pt)",
            ));
        }
        if let Some(h) = self.page_height_pt
            && 2.0 * self.margin_pt > h
        {
            return Err(RectError::validation(
                "margins leave no room on the page (2 * margin_pt > page_height_pt)",
            ));
        }
        Ok(())
    }

    /// Space available to each top-level box: the page inside its margins.
    pub fn region(&self) -> Region {
        Region::new(
            (self.page_width_pt - 2.0 * self.margin_pt).max(0.0),
            self.page_height_pt
                .map(|h| (h - 2.0 * self.margin_pt).max(0.0)),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
