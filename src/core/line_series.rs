use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Record, SeriesId, TimeScale};

/// One record projected into plot-area pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub record_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Projects one series of `records` into plot-area coordinates.
///
/// Points keep input order; an unsorted source yields a polyline that
/// doubles back on itself. The function is side-effect free so rendering and
/// tests consume the exact same geometry.
#[must_use]
pub fn project_series_points(
    records: &[Record],
    series: SeriesId,
    x_scale: TimeScale,
    y_scale: LinearScale,
) -> Vec<SeriesPoint> {
    records
        .iter()
        .enumerate()
        .map(|(record_index, record)| SeriesPoint {
            record_index,
            x: x_scale.date_to_pixel(record.date()),
            y: y_scale.domain_to_pixel(record.metric(series) as f64),
        })
        .collect()
}
