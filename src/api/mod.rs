mod config;
mod engine;
pub mod grid;
pub mod markers;

pub use config::ChartConfig;
pub use engine::ChartEngine;
pub use grid::{
    GridLayer, MAX_FRET_LINES, build_grid, fret_line_positions, string_line_positions,
};
pub use markers::marker_circles;

use crate::core::MarkerRecord;
use crate::error::ChartResult;
use crate::render::{RecordingRenderer, RenderFrame};

/// Composes a frame headlessly, without any drawing backend.
pub fn compose_frame(markers: Vec<MarkerRecord>, config: ChartConfig) -> ChartResult<RenderFrame> {
    let mut engine = ChartEngine::new(RecordingRenderer::default(), config)?;
    engine.set_markers(markers);
    engine.build_render_frame()
}
