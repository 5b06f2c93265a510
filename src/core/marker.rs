use serde::{Deserialize, Serialize};

/// One normalized marker spec.
///
/// Coordinates are optional because sparse input is allowed: a record missing
/// either coordinate still takes part in bounds computation but is never drawn.
/// After loading, `string` is always numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub fret: Option<f64>,
    pub string: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<String>,
}

impl MarkerRecord {
    pub const DEFAULT_RADIUS: f64 = 0.5;
    pub const DEFAULT_COLOR: &'static str = "blue";

    #[must_use]
    pub fn new(fret: f64, string: f64) -> Self {
        Self {
            fret: Some(fret),
            string: Some(string),
            radius: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Circle centre, or `None` when either coordinate is missing.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.fret?, self.string?))
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius.unwrap_or(Self::DEFAULT_RADIUS)
    }

    #[must_use]
    pub fn color_name(&self) -> &str {
        self.color.as_deref().unwrap_or(Self::DEFAULT_COLOR)
    }
}
