mod color;
mod frame;
mod layout;
mod primitives;
mod recording_renderer;

pub use color::Color;
pub use frame::RenderFrame;
pub use layout::{PlotLayout, PlotMargins};
pub use primitives::{AxisDecorations, AxisTick, CirclePrimitive, LinePrimitive};
pub use recording_renderer::{DrawCommand, RecordingRenderer};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Minimal drawing capability implemented by every backend.
///
/// Primitives arrive in data space; the backend owns the data-to-pixel
/// transform established by `set_viewport` and must keep the aspect ratio
/// equal on both axes. `present` finishes the pass (flush, show, or record).
pub trait Renderer {
    fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()>;

    fn draw_axes(&mut self, axes: &AxisDecorations) -> ChartResult<()>;

    fn present(&mut self) -> ChartResult<()>;

    /// Replays a fully composed frame: grid lines, then markers in input
    /// order, then decorations.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.set_viewport(frame.viewport)?;
        for line in &frame.lines {
            self.draw_line(line)?;
        }
        for circle in &frame.circles {
            self.draw_circle(circle)?;
        }
        self.draw_axes(&frame.axes)?;
        self.present()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
