//! Input loading for marker files.

pub mod loader;

pub use loader::{load_markers, normalize_markers, parse_markers};
