//! fbchart: fretboard marker diagrams from JSON.
//!
//! The pipeline is load -> normalize -> bounds -> grid + markers -> present.
//! Everything up to the composed [`render::RenderFrame`] is backend-free, so
//! the whole chart can be built and inspected headlessly; Cairo (PNG) and GTK
//! (window) backends are behind cargo features.

pub mod api;
pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
