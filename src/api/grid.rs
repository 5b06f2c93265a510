use crate::core::{GuitarString, STRING_COUNT, VerticalBoundsPolicy, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisTick, Color, LinePrimitive};

/// Upper limit on vertical reference lines in one frame.
pub const MAX_FRET_LINES: usize = 10_000;

/// Fret positions of the vertical reference lines: every `spacing` units from
/// `floor(x_min)` through `floor(x_max)` inclusive.
///
/// Fails with [`ChartError::InvalidData`] when the span would need more than
/// [`MAX_FRET_LINES`] lines.
pub fn fret_line_positions(viewport: Viewport, spacing: u32) -> ChartResult<Vec<f64>> {
    let start = viewport.x_min.floor();
    let step = f64::from(spacing.max(1));
    let steps = ((viewport.x_max.floor() - start) / step).floor();
    if !steps.is_finite() || steps < 0.0 || steps >= MAX_FRET_LINES as f64 {
        return Err(ChartError::InvalidData(format!(
            "fret span [{}, {}] at spacing {spacing} needs more than {MAX_FRET_LINES} grid lines",
            viewport.x_min, viewport.x_max
        )));
    }

    let count = steps as usize + 1;
    Ok((0..count).map(|index| start + index as f64 * step).collect())
}

/// Vertical positions of the six string lines, bottom (`E`) to top (`e`).
///
/// Fixed slots pin the lines to `0..=5`. Data-driven bounds spread them evenly
/// over `[y_min, y_max]`, falling back to `0..=5` for an empty span.
#[must_use]
pub fn string_line_positions(
    viewport: Viewport,
    policy: VerticalBoundsPolicy,
) -> [f64; STRING_COUNT] {
    let slots = GuitarString::ALL.map(|string| string.slot() as f64);
    match policy {
        VerticalBoundsPolicy::FixedSlots => slots,
        VerticalBoundsPolicy::DataDriven if viewport.y_max > viewport.y_min => {
            let step = viewport.height() / (STRING_COUNT - 1) as f64;
            slots.map(|slot| viewport.y_min + slot * step)
        }
        VerticalBoundsPolicy::DataDriven => slots,
    }
}

/// Reference lines for one frame plus the tick labels that name them.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayer {
    pub lines: Vec<LinePrimitive>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

/// Builds the fret and string reference lines spanning the whole viewport.
pub fn build_grid(
    viewport: Viewport,
    spacing: u32,
    policy: VerticalBoundsPolicy,
    color: Color,
    stroke_width: f64,
) -> ChartResult<GridLayer> {
    let frets = fret_line_positions(viewport, spacing)?;
    let strings = string_line_positions(viewport, policy);

    let mut lines = Vec::with_capacity(frets.len() + STRING_COUNT);
    lines.extend(frets.iter().map(|&x| {
        LinePrimitive::new(x, viewport.y_min, x, viewport.y_max, stroke_width, color)
    }));
    lines.extend(strings.iter().map(|&y| {
        LinePrimitive::new(viewport.x_min, y, viewport.x_max, y, stroke_width, color)
    }));

    let x_ticks = frets
        .iter()
        .map(|&x| AxisTick::new(x, format!("{x}")))
        .collect();
    let y_ticks = GuitarString::ALL
        .iter()
        .zip(strings)
        .map(|(string, y)| AxisTick::new(y, string.symbol()))
        .collect();

    Ok(GridLayer {
        lines,
        x_ticks,
        y_ticks,
    })
}
