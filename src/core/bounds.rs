use clap::ValueEnum;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{MarkerRecord, STRING_COUNT, Viewport};

/// Horizontal range used when no record carries a fret.
pub const DEFAULT_FRET_RANGE: (f64, f64) = (0.0, 10.0);

/// Vertical range used by [`VerticalBoundsPolicy::DataDriven`] when no record
/// carries a string.
pub const DEFAULT_DATA_STRING_RANGE: (f64, f64) = (0.0, 10.0);

/// Fixed vertical range covering the six string slots.
pub const STRING_SLOT_RANGE: (f64, f64) = (0.0, (STRING_COUNT - 1) as f64);

/// Margin added on each side of data-derived ranges.
pub const DATA_MARGIN: f64 = 1.0;

/// How the vertical axis limits are chosen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum VerticalBoundsPolicy {
    /// Pin the axis to the six string slots, `0..=5`, regardless of data.
    #[default]
    FixedSlots,
    /// Derive the axis from the data with a one-unit margin, like frets.
    DataDriven,
}

/// Computes the axis limits for a set of normalized records.
///
/// Every record with a fret contributes to the horizontal range, even when
/// its string is missing and it will not be drawn.
#[must_use]
pub fn compute_viewport(records: &[MarkerRecord], policy: VerticalBoundsPolicy) -> Viewport {
    let (x_min, x_max) =
        padded_range(records.iter().filter_map(|record| record.fret)).unwrap_or(DEFAULT_FRET_RANGE);

    let (y_min, y_max) = match policy {
        VerticalBoundsPolicy::FixedSlots => STRING_SLOT_RANGE,
        VerticalBoundsPolicy::DataDriven => {
            padded_range(records.iter().filter_map(|record| record.string))
                .unwrap_or(DEFAULT_DATA_STRING_RANGE)
        }
    };

    Viewport::new(x_min, x_max, y_min, y_max)
}

fn padded_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values.map(OrderedFloat).fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })?;
    let low = (min.0 - margin_at(min.0)).max(f64::MIN);
    let high = (max.0 + margin_at(max.0)).min(f64::MAX);
    Some((low, high))
}

/// One unit, or one relative epsilon where a unit is lost to rounding.
fn margin_at(value: f64) -> f64 {
    DATA_MARGIN.max(value.abs() * f64::EPSILON)
}
