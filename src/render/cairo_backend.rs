use std::f64::consts::{FRAC_PI_2, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::core::{CanvasSize, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisDecorations, CirclePrimitive, Color, LinePrimitive, PlotLayout, PlotMargins, Renderer,
};

const TICK_FONT_SIZE: f64 = 10.0;
const LABEL_FONT_SIZE: f64 = 11.0;
const TITLE_FONT_SIZE: f64 = 13.0;
const TICK_LENGTH: f64 = 4.0;
const FRAME_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const BACKGROUND_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub labels_drawn: usize,
}

/// Renderers that can draw into an externally owned Cairo context, such as a
/// GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        canvas: CanvasSize,
        frame: &crate::render::RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Offscreen passes draw into an owned ARGB image surface which can then be
/// written out with [`CairoRenderer::write_png`]. Passes started through
/// [`CairoContextRenderer`] draw on the caller's context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    canvas: CanvasSize,
    margins: PlotMargins,
    context: Option<Context>,
    layout: Option<PlotLayout>,
    pending_stats: CairoRenderStats,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(canvas: CanvasSize) -> ChartResult<Self> {
        canvas.validate()?;
        let width = i32::try_from(canvas.width).map_err(|_| invalid_canvas(canvas))?;
        let height = i32::try_from(canvas.height).map_err(|_| invalid_canvas(canvas))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            canvas,
            margins: PlotMargins::default(),
            context: None,
            layout: None,
            pending_stats: CairoRenderStats::default(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut file = File::create(path).map_err(|err| {
            ChartError::Backend(format!("failed to create '{}': {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::Backend(format!("failed to write PNG '{}': {err}", path.display()))
        })?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    fn active(&self) -> ChartResult<(&Context, PlotLayout)> {
        match (&self.context, self.layout) {
            (Some(context), Some(layout)) => Ok((context, layout)),
            _ => Err(ChartError::InvalidData(
                "set_viewport must be called before drawing".to_owned(),
            )),
        }
    }
}

impl Renderer for CairoRenderer {
    fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let layout = PlotLayout::fit(self.canvas, viewport, self.margins)?;
        let context = match self.context.take() {
            Some(context) => context,
            None => Context::new(&self.surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?,
        };

        apply_color(&context, BACKGROUND_COLOR);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        self.context = Some(context);
        self.layout = Some(layout);
        self.pending_stats = CairoRenderStats::default();
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        let (context, layout) = self.active()?;
        let (x1, y1) = layout.to_pixel(line.x1, line.y1);
        let (x2, y2) = layout.to_pixel(line.x2, line.y2);

        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        clip_to_plot(context, layout);
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(x1, y1);
        context.line_to(x2, y2);
        let stroked = context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err));
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        stroked?;
        self.pending_stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        circle.validate()?;
        let (context, layout) = self.active()?;
        let (cx, cy) = layout.to_pixel(circle.cx, circle.cy);
        let (unit, _) = layout.unit_lengths();

        // Markers near the edge are clipped to the plot box.
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        clip_to_plot(context, layout);
        context.arc(cx, cy, circle.radius * unit, 0.0, TAU);
        apply_color(context, circle.fill);
        let filled = context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err));
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        filled?;

        self.pending_stats.circles_drawn += 1;
        Ok(())
    }

    fn draw_axes(&mut self, axes: &AxisDecorations) -> ChartResult<()> {
        axes.validate()?;
        let (context, layout) = self.active()?;
        let mut labels = 0;

        apply_color(context, FRAME_COLOR);
        context.set_line_width(1.0);
        context.rectangle(layout.left, layout.top, layout.width, layout.height);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke plot frame", err))?;

        let viewport = layout.viewport();
        let x_ticks: Vec<_> = axes
            .x_ticks
            .iter()
            .filter(|tick| (viewport.x_min..=viewport.x_max).contains(&tick.position))
            .collect();

        for tick in &x_ticks {
            let x = layout.x_to_pixel(tick.position);
            context.move_to(x, layout.bottom());
            context.line_to(x, layout.bottom() + TICK_LENGTH);
        }
        for tick in &axes.y_ticks {
            let y = layout.y_to_pixel(tick.position);
            context.move_to(layout.left, y);
            context.line_to(layout.left - TICK_LENGTH, y);
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke ticks", err))?;

        for tick in &x_ticks {
            show_text(
                context,
                &tick.label,
                TICK_FONT_SIZE,
                axes.text_color,
                (
                    layout.x_to_pixel(tick.position),
                    layout.bottom() + TICK_LENGTH + 2.0,
                ),
                Anchor::TopCenter,
            );
            labels += 1;
        }
        for tick in &axes.y_ticks {
            show_text(
                context,
                &tick.label,
                TICK_FONT_SIZE,
                axes.text_color,
                (
                    layout.left - TICK_LENGTH - 3.0,
                    layout.y_to_pixel(tick.position),
                ),
                Anchor::MiddleRight,
            );
            labels += 1;
        }

        let canvas_width = f64::from(self.canvas.width);
        let canvas_height = f64::from(self.canvas.height);
        if !axes.title.is_empty() {
            show_text(
                context,
                &axes.title,
                TITLE_FONT_SIZE,
                axes.text_color,
                (layout.left + layout.width / 2.0, 8.0),
                Anchor::TopCenter,
            );
            labels += 1;
        }
        if !axes.x_label.is_empty() {
            show_text(
                context,
                &axes.x_label,
                LABEL_FONT_SIZE,
                axes.text_color,
                (layout.left + layout.width / 2.0, canvas_height - 6.0),
                Anchor::BottomCenter,
            );
            labels += 1;
        }
        if !axes.y_label.is_empty() {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save cairo state", err))?;
            context.translate(12.0, layout.top + layout.height / 2.0);
            context.rotate(-FRAC_PI_2);
            show_text(
                context,
                &axes.y_label,
                LABEL_FONT_SIZE,
                axes.text_color,
                (0.0, 0.0),
                Anchor::MiddleCenter,
            );
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
            labels += 1;
        }

        debug!(canvas_width, canvas_height, labels, "drew axis decorations");
        self.pending_stats.labels_drawn += labels;
        Ok(())
    }

    fn present(&mut self) -> ChartResult<()> {
        self.active()?;
        self.surface.flush();
        self.last_stats = self.pending_stats;
        self.context = None;
        self.layout = None;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        canvas: CanvasSize,
        frame: &crate::render::RenderFrame,
    ) -> ChartResult<()> {
        let offscreen_canvas = self.canvas;
        self.canvas = canvas.validate()?;
        self.context = Some(context.clone());

        let result = self.render(frame);

        self.canvas = offscreen_canvas;
        self.context = None;
        self.layout = None;
        result
    }
}

#[derive(Debug, Clone, Copy)]
enum Anchor {
    TopCenter,
    BottomCenter,
    MiddleRight,
    MiddleCenter,
}

fn show_text(
    context: &Context,
    text: &str,
    font_size: f64,
    color: Color,
    (x, y): (f64, f64),
    anchor: Anchor,
) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let (left, top) = match anchor {
        Anchor::TopCenter => (x - width / 2.0, y),
        Anchor::BottomCenter => (x - width / 2.0, y - height),
        Anchor::MiddleRight => (x - width, y - height / 2.0),
        Anchor::MiddleCenter => (x - width / 2.0, y - height / 2.0),
    };

    apply_color(context, color);
    context.move_to(left, top);
    pangocairo::functions::show_layout(context, &layout);
    context.new_path();
}

fn clip_to_plot(context: &Context, layout: PlotLayout) {
    context.rectangle(layout.left, layout.top, layout.width, layout.height);
    context.clip();
    context.new_path();
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn invalid_canvas(canvas: CanvasSize) -> ChartError {
    ChartError::InvalidCanvas {
        width: canvas.width,
        height: canvas.height,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
