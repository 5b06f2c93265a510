use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisDecorations, CirclePrimitive, LinePrimitive, Renderer};

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetViewport(Viewport),
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Axes(AxisDecorations),
    Present,
}

/// Headless renderer used by tests and non-interactive runs.
///
/// It records every command in call order and still validates geometry so
/// tests catch bad primitives without a real backend.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub present_count: usize,
}

impl RecordingRenderer {
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Circles drawn since the last viewport was set, in draw order.
    #[must_use]
    pub fn circles(&self) -> Vec<CirclePrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle(circle) => Some(*circle),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::SetViewport(viewport) => Some(*viewport),
            _ => None,
        })
    }

    fn require_viewport(&self) -> ChartResult<()> {
        if self.viewport().is_none() {
            return Err(ChartError::InvalidData(
                "set_viewport must be called before drawing".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        viewport.validate()?;
        self.commands.clear();
        self.last_line_count = 0;
        self.last_circle_count = 0;
        self.commands.push(DrawCommand::SetViewport(viewport));
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        self.require_viewport()?;
        line.validate()?;
        self.last_line_count += 1;
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        self.require_viewport()?;
        circle.validate()?;
        self.last_circle_count += 1;
        self.commands.push(DrawCommand::Circle(*circle));
        Ok(())
    }

    fn draw_axes(&mut self, axes: &AxisDecorations) -> ChartResult<()> {
        self.require_viewport()?;
        axes.validate()?;
        self.commands.push(DrawCommand::Axes(axes.clone()));
        Ok(())
    }

    fn present(&mut self) -> ChartResult<()> {
        self.require_viewport()?;
        self.present_count += 1;
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
