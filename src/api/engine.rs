use tracing::{debug, trace};

use crate::core::{MarkerRecord, Viewport, compute_viewport};
use crate::error::ChartResult;
use crate::render::{AxisDecorations, RenderFrame, Renderer};

use super::ChartConfig;
use super::grid::build_grid;
use super::markers::marker_circles;

/// Composes fretboard frames from marker records and drives a renderer.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    markers: Vec<MarkerRecord>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            markers: Vec::new(),
        })
    }

    /// Replaces the marker records. Order is draw order.
    pub fn set_markers(&mut self, markers: Vec<MarkerRecord>) {
        debug!(count = markers.len(), "set marker records");
        self.markers = markers;
    }

    pub fn append_marker(&mut self, marker: MarkerRecord) {
        self.markers.push(marker);
        trace!(count = self.markers.len(), "append marker record");
    }

    #[must_use]
    pub fn markers(&self) -> &[MarkerRecord] {
        &self.markers
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Axis limits for the current records.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        compute_viewport(&self.markers, self.config.vertical_bounds)
    }

    /// Builds the complete scene without touching the renderer.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.viewport().validate()?;
        let grid = build_grid(
            viewport,
            self.config.grid_spacing,
            self.config.vertical_bounds,
            self.config.grid_color,
            self.config.grid_line_width,
        )?;
        let circles = marker_circles(&self.markers, self.config.marker_alpha)?;

        let axes = AxisDecorations {
            title: self.config.title.clone(),
            x_label: self.config.x_label.clone(),
            y_label: self.config.y_label.clone(),
            x_ticks: grid.x_ticks,
            y_ticks: grid.y_ticks,
            text_color: self.config.text_color,
        };

        let mut frame = RenderFrame::new(self.config.canvas, viewport, axes);
        frame.lines = grid.lines;
        frame.circles = circles;
        debug!(
            x_min = viewport.x_min,
            x_max = viewport.x_max,
            y_min = viewport.y_min,
            y_max = viewport.y_max,
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            "composed render frame"
        );
        Ok(frame)
    }

    /// Composes the frame and replays it on the renderer.
    pub fn render(&mut self) -> ChartResult<RenderFrame> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
