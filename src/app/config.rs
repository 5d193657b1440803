use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FitError, Result};
use crate::render::{Palette, RendererSettings};

pub const DEFAULT_BACKGROUND_IMAGE: &str = "https://images.unsplash.com/photo-1600585152220-90363fe7e115?auto=format&fit=crop&w=800&q=80";

pub const PLACEHOLDER_MESSAGE: &str = "Enter room dimensions to see visualization";

/// Configuration knobs for the checker. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Side of the square canvas in pixels.
    pub canvas_size: f64,
    /// Space kept free around the room on every side, in pixels.
    pub padding: f64,
    pub background_image: Option<String>,
    pub palette: Palette,
    /// Target field for checker log events.
    pub log_target: String,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            canvas_size: 600.0,
            padding: 60.0,
            background_image: Some(DEFAULT_BACKGROUND_IMAGE.to_string()),
            palette: Palette::default(),
            log_target: "room_fit::checker".to_string(),
            metrics_target: "room_fit::checker.metrics".to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.canvas_size.is_finite() || self.canvas_size <= 0.0 {
            return Err(FitError::Config(format!(
                "canvas_size must be positive (got {})",
                self.canvas_size
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding * 2.0 >= self.canvas_size
        {
            return Err(FitError::InvalidCanvas {
                canvas_size: self.canvas_size,
                padding: self.padding,
            });
        }
        Ok(())
    }

    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings {
            palette: self.palette.clone(),
            background_image: self.background_image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        assert_eq!(CheckerConfig::from_json("{}").unwrap(), CheckerConfig::default());
    }

    #[test]
    fn partial_palette_keeps_other_colors() {
        let config = CheckerConfig::from_json(
            r##"{"canvas_size": 800, "background_image": null, "palette": {"fits": "#00FF00"}}"##,
        )
        .unwrap();
        assert_eq!(config.canvas_size, 800.0);
        assert_eq!(config.padding, 60.0);
        assert!(config.background_image.is_none());
        assert_eq!(config.palette.fits, "#00FF00");
        assert_eq!(config.palette.no_fit, "#DC2626");
    }

    #[test]
    fn oversized_padding_is_rejected() {
        let err = CheckerConfig::from_json(r#"{"canvas_size": 100, "padding": 50}"#).unwrap_err();
        assert!(matches!(err, FitError::InvalidCanvas { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            CheckerConfig::from_json(r#"{"canvas": 10}"#),
            Err(FitError::Json(_))
        ));
    }
}
