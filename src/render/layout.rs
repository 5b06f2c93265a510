use crate::core::{CanvasSize, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel space reserved around the plot box for title, ticks and axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 36.0,
            bottom: 48.0,
        }
    }
}

/// Equal-aspect data-to-pixel transform for one canvas.
///
/// Both axes share one pixels-per-unit factor so circles stay round; the plot
/// box shrinks along the looser axis, centred in the space left by the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl PlotLayout {
    pub fn fit(canvas: CanvasSize, viewport: Viewport, margins: PlotMargins) -> ChartResult<Self> {
        canvas.validate()?;
        viewport.validate()?;

        let available_width = f64::from(canvas.width) - margins.left - margins.right;
        let available_height = f64::from(canvas.height) - margins.top - margins.bottom;
        if available_width <= 0.0 || available_height <= 0.0 {
            return Err(ChartError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let unit = (available_width / viewport.width()).min(available_height / viewport.height());
        let width = viewport.width() * unit;
        let height = viewport.height() * unit;
        let left = margins.left + (available_width - width) / 2.0;
        let top = margins.top + (available_height - height) / 2.0;

        let x_scale = LinearScale::new(viewport.x_min, viewport.x_max, left, left + width)?;
        // Vertical axis grows upwards.
        let y_scale = LinearScale::new(viewport.y_min, viewport.y_max, top + height, top)?;

        Ok(Self {
            left,
            top,
            width,
            height,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_scale.domain_to_pixel(x), self.y_scale.domain_to_pixel(y))
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        self.x_scale.domain_to_pixel(x)
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        self.y_scale.domain_to_pixel(y)
    }

    /// Data-space limits this layout was fitted to.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let (x_min, x_max) = self.x_scale.domain();
        let (y_min, y_max) = self.y_scale.domain();
        Viewport::new(x_min, x_max, y_min, y_max)
    }

    /// Horizontal and vertical pixel length of one data unit.
    #[must_use]
    pub fn unit_lengths(&self) -> (f64, f64) {
        (self.x_scale.unit_length(), self.y_scale.unit_length())
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
