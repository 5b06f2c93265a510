use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Viewport};
use crate::error::ChartResult;
use crate::render::{AxisDecorations, CirclePrimitive, LinePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Lines are drawn first, then circles in input order, then decorations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: CanvasSize,
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub axes: AxisDecorations,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize, viewport: Viewport, axes: AxisDecorations) -> Self {
        Self {
            canvas,
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            axes,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        self.axes.validate()
    }

    #[must_use]
    pub fn vertical_lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.lines.iter().filter(|line| line.is_vertical())
    }

    #[must_use]
    pub fn horizontal_lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.lines.iter().filter(|line| line.is_horizontal())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty()
    }
}
