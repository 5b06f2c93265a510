pub mod bounds;
pub mod marker;
pub mod scale;
pub mod strings;
pub mod types;

pub use bounds::{VerticalBoundsPolicy, compute_viewport};
pub use marker::MarkerRecord;
pub use scale::LinearScale;
pub use strings::{GuitarString, STRING_COUNT, string_slot};
pub use types::{CanvasSize, Viewport};
