use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, VerticalBoundsPolicy};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart setup shared by every output backend.
///
/// This type is serializable so a chart style can be kept next to the marker
/// files; every field has a default, so a config file may be partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: CanvasSize,
    /// Distance in frets between vertical reference lines.
    pub grid_spacing: u32,
    pub vertical_bounds: VerticalBoundsPolicy,
    pub marker_alpha: f64,
    pub grid_color: Color,
    /// Grid stroke width in pixels.
    pub grid_line_width: f64,
    pub text_color: Color,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            grid_spacing: 1,
            vertical_bounds: VerticalBoundsPolicy::default(),
            marker_alpha: 0.5,
            grid_color: Color::rgb(0.827, 0.827, 0.827),
            grid_line_width: 0.5,
            text_color: Color::rgb(0.0, 0.0, 0.0),
            title: "FBChart grid".to_owned(),
            x_label: "X".to_owned(),
            y_label: "Y".to_owned(),
        }
    }
}

impl ChartConfig {
    /// Loads a (possibly partial) config from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            ChartError::MalformedInput(format!(
                "failed to read config '{}': {err}",
                path.display()
            ))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| ChartError::MalformedInput(format!("invalid chart config: {err}")))?;
        config.validate()
    }

    #[must_use]
    pub fn with_vertical_bounds(mut self, policy: VerticalBoundsPolicy) -> Self {
        self.vertical_bounds = policy;
        self
    }

    #[must_use]
    pub fn with_grid_spacing(mut self, spacing: u32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.canvas.validate()?;
        if self.grid_spacing == 0 {
            return Err(ChartError::InvalidData("grid spacing must be >= 1".to_owned()));
        }
        if !self.marker_alpha.is_finite() || self.marker_alpha <= 0.0 || self.marker_alpha > 1.0 {
            return Err(ChartError::InvalidData("marker alpha must be in (0, 1]".to_owned()));
        }
        if !self.grid_line_width.is_finite() || self.grid_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid line width must be finite and > 0".to_owned(),
            ));
        }
        self.grid_color.validate()?;
        self.text_color.validate()?;
        Ok(self)
    }
}
