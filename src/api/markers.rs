use crate::core::MarkerRecord;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color};

/// Turns records into filled circles, preserving input order.
///
/// Records missing either coordinate are skipped without error.
pub fn marker_circles(records: &[MarkerRecord], alpha: f64) -> ChartResult<Vec<CirclePrimitive>> {
    records
        .iter()
        .filter_map(|record| record.position().map(|position| (record, position)))
        .map(|(record, (x, y))| {
            let fill = Color::parse(record.color_name())?.with_alpha(alpha);
            Ok(CirclePrimitive::new(x, y, record.radius(), fill))
        })
        .collect()
}
