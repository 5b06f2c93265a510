//! GTK4 window that presents one composed frame.
//!
//! The frame is redrawn through [`CairoRenderer`] on every GTK draw callback,
//! so resizing the window keeps the equal-aspect layout.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{info, warn};

use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoContextRenderer, CairoRenderer, RenderFrame};

const APPLICATION_ID: &str = "rs.fbchart.viewer";

/// Hosts a frame inside a `gtk::DrawingArea`.
pub struct GtkFrameView {
    drawing_area: gtk::DrawingArea,
}

impl GtkFrameView {
    pub fn new(frame: RenderFrame) -> ChartResult<Self> {
        frame.validate()?;
        let renderer = Rc::new(RefCell::new(CairoRenderer::new(frame.canvas)?));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(frame.canvas.width as i32);
        drawing_area.set_content_height(frame.canvas.height as i32);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        drawing_area.set_draw_func(move |_, context, width, height| {
            let canvas = CanvasSize::new(width.max(0) as u32, height.max(0) as u32);
            if let Err(err) = renderer
                .borrow_mut()
                .render_on_cairo_context(context, canvas, &frame)
            {
                warn!(error = %err, width, height, "failed to draw fretboard frame");
            }
        });

        Ok(Self { drawing_area })
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

/// Opens a window showing `frame` and blocks until it is closed.
pub fn present_frame(frame: RenderFrame) -> ChartResult<()> {
    gtk::init().map_err(|err| ChartError::Backend(format!("failed to initialize GTK: {err}")))?;

    let title = frame.axes.title.clone();
    let canvas = frame.canvas;
    let view = Rc::new(GtkFrameView::new(frame)?);

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();
    app.connect_activate(move |app| {
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(title.as_str())
            .default_width(canvas.width as i32)
            .default_height(canvas.height as i32)
            .child(view.drawing_area())
            .build();
        window.present();
    });

    info!("presenting frame in GTK window");
    // Our own argv is already parsed; GTK must not see it.
    let status = app.run_with_args::<&str>(&[]);
    if status != gtk::glib::ExitCode::SUCCESS {
        return Err(ChartError::Backend("GTK application exited with failure".to_owned()));
    }
    Ok(())
}
