//! Command-line surface of the `fbchart` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::core::VerticalBoundsPolicy;

#[derive(Debug, Parser)]
#[command(
    name = "fbchart",
    version,
    about = "Draw a fretboard grid with circle markers described in a JSON file"
)]
pub struct Cli {
    /// JSON array of marker specs: {"fret", "string", "radius", "color"}.
    #[arg(value_name = "DATA_JSON")]
    pub input: PathBuf,

    /// Chart config JSON (canvas, spacing, colors, labels, bounds policy).
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// How the vertical axis limits are chosen (overrides the config file).
    #[arg(long, value_enum)]
    pub vertical_bounds: Option<VerticalBoundsPolicy>,

    /// Distance between vertical grid lines, in frets (overrides the config file).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub spacing: Option<u32>,

    /// Write the chart to a PNG file instead of opening a window.
    #[arg(short = 'o', long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Print the composed scene as JSON.
    #[arg(long)]
    pub dump_scene: bool,
}
