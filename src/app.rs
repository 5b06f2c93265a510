//! Top-level orchestration for the `fbchart` binary.
//!
//! `src/main.rs` only maps the outcome to an exit status; this module parses
//! arguments, loads the marker file, composes the frame and hands it to the
//! selected output (window, PNG, scene dump).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use thiserror::Error;
use tracing::{debug, info};

use crate::api::{ChartConfig, compose_frame};
use crate::cli::Cli;
use crate::error::{ChartError, ChartResult};
use crate::input::load_markers;
use crate::render::RenderFrame;

/// Terminal failure of one binary run. Every variant exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong arguments; carries the text to show the user.
    #[error("{0}")]
    Usage(String),

    #[error("File {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Usage and missing-file notices go to stdout; pipeline failures to stderr.
    #[must_use]
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::MissingInput(_))
    }
}

/// Runs the binary against an argv (program name first).
pub fn run<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    // Checked before anything else so a missing file never reaches a backend.
    if !cli.input.exists() {
        return Err(AppError::MissingInput(cli.input));
    }

    let config = resolve_config(&cli)?;
    let markers = load_markers(&cli.input)?;
    let frame = compose_frame(markers, config)?;

    if cli.dump_scene {
        let scene = serde_json::to_string_pretty(&frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode scene: {err}")))?;
        println!("{scene}");
    }

    match &cli.output {
        Some(path) => export_png(&frame, path)?,
        None if cli.dump_scene => {}
        None => present(frame)?,
    }
    Ok(())
}

fn handle_parse_error(err: clap::Error) -> Result<(), AppError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{err}");
            Ok(())
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => Err(AppError::Usage(
            Cli::command().render_usage().to_string(),
        )),
        _ => Err(AppError::Usage(err.to_string())),
    }
}

fn resolve_config(cli: &Cli) -> ChartResult<ChartConfig> {
    let mut config = match &cli.config {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => ChartConfig::default(),
    };
    if let Some(policy) = cli.vertical_bounds {
        config = config.with_vertical_bounds(policy);
    }
    if let Some(spacing) = cli.spacing {
        config = config.with_grid_spacing(spacing);
    }
    debug!(?config, "resolved chart config");
    config.validate()
}

#[cfg(feature = "cairo-backend")]
fn export_png(frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    use crate::render::{CairoRenderer, Renderer};

    let mut renderer = CairoRenderer::new(frame.canvas)?;
    renderer.render(frame)?;
    renderer.write_png(path)?;
    info!(path = %path.display(), circles = frame.circles.len(), "exported png");
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn export_png(_frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    Err(ChartError::Backend(format!(
        "cannot write '{}': PNG export requires the `cairo-backend` feature",
        path.display()
    )))
}

#[cfg(feature = "gtk4-adapter")]
fn present(frame: RenderFrame) -> ChartResult<()> {
    crate::platform_gtk::present_frame(frame)
}

#[cfg(not(feature = "gtk4-adapter"))]
fn present(frame: RenderFrame) -> ChartResult<()> {
    use crate::render::{RecordingRenderer, Renderer};

    let mut renderer = RecordingRenderer::default();
    renderer.render(&frame)?;
    info!("no interactive display backend compiled in (enable `gtk4-adapter`)");
    println!(
        "fbchart: {} markers, {} grid lines, x=[{}, {}], y=[{}, {}]",
        renderer.last_circle_count,
        renderer.last_line_count,
        frame.viewport.x_min,
        frame.viewport.x_max,
        frame.viewport.y_min,
        frame.viewport.y_max,
    );
    Ok(())
}
