use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LinearScale, PlotArea, Record, SeriesId, TimeScale, project_series_points};
use crate::error::ChartResult;
use crate::interaction::{MarkerHit, tooltip_lines};
use crate::render::{
    CirclePrimitive, LayerKind, MarkerTag, PolylinePrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::ChartConfig;
use super::axis_builder::{AxisOrient, AxisSpec, append_axis};

/// The three scales fitted to a record set; all absent for empty input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: Option<TimeScale>,
    pub y_primary: Option<LinearScale>,
    pub y_secondary: Option<LinearScale>,
}

impl ChartScales {
    /// Fits `x` to the date extent and each `y` to `[0, max(metric)]`.
    pub fn fit(records: &[Record], plot: PlotArea) -> ChartResult<Self> {
        let x = TimeScale::from_extent(records.iter().map(Record::date), (0.0, plot.width));
        let y_primary = fit_vertical(records, SeriesId::Primary, plot.height)?;
        let y_secondary = fit_vertical(records, SeriesId::Secondary, plot.height)?;
        Ok(Self {
            x,
            y_primary,
            y_secondary,
        })
    }

    #[must_use]
    pub fn y(&self, series: SeriesId) -> Option<LinearScale> {
        match series {
            SeriesId::Primary => self.y_primary,
            SeriesId::Secondary => self.y_secondary,
        }
    }
}

fn fit_vertical(
    records: &[Record],
    series: SeriesId,
    height: f64,
) -> ChartResult<Option<LinearScale>> {
    records
        .iter()
        .map(|record| record.metric(series))
        .max()
        .map(|max| LinearScale::zero_based_vertical(max as f64, height))
        .transpose()
}

/// Static chart output: draw commands plus the hover hit table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    pub scales: ChartScales,
    /// Primary markers first, then secondary, each in record order.
    pub markers: Vec<MarkerHit>,
    pub plot_area: PlotArea,
}

impl ChartScene {
    pub fn markers_for(&self, series: SeriesId) -> impl Iterator<Item = &MarkerHit> {
        self.markers
            .iter()
            .filter(move |marker| marker.tag.series == series)
    }
}

/// Builds axes, series lines, captions and point markers for `records`.
///
/// Pure: no rendering happens here and the tooltip starts hidden. Records are
/// drawn in input order.
pub fn build_chart(records: &[Record], config: &ChartConfig) -> ChartResult<ChartScene> {
    config.validate()?;
    let plot = config.plot_area()?;
    let scales = ChartScales::fit(records, plot)?;

    let mut frame = RenderFrame::new(config.viewport).with_background(config.background);
    append_axes(&mut frame, plot, &scales, config);
    append_labels(&mut frame, plot, config);

    let mut markers = Vec::with_capacity(records.len() * SeriesId::ALL.len());
    if let (Some(x_scale), Some(y_primary), Some(y_secondary)) =
        (scales.x, scales.y_primary, scales.y_secondary)
    {
        for (series, y_scale) in [
            (SeriesId::Primary, y_primary),
            (SeriesId::Secondary, y_secondary),
        ] {
            let style = config.series_style(series);
            let projected = project_series_points(records, series, x_scale, y_scale);
            let mut points = Vec::with_capacity(projected.len());
            let marker_layer = frame.layer_mut(LayerKind::Markers);
            for point in projected {
                let (cx, cy) = plot.to_canvas(point.x, point.y);
                let record = records[point.record_index];
                let tag = MarkerTag {
                    series,
                    record_index: point.record_index,
                };
                marker_layer.circles.push(
                    CirclePrimitive::new(cx, cy, config.marker_radius_px, style.color)
                        .with_tag(tag)
                        .with_title(tooltip_lines(&record).join("\n")),
                );
                markers.push(MarkerHit {
                    tag,
                    record,
                    cx,
                    cy,
                    radius: config.marker_radius_px,
                });
                points.push((cx, cy));
            }

            frame
                .layer_mut(LayerKind::Series)
                .polylines
                .push(PolylinePrimitive::new(
                    series,
                    points,
                    config.line_width_px,
                    style.color,
                ));
        }
    }

    debug!(
        records = records.len(),
        markers = markers.len(),
        x_domain = ?scales.x.map(TimeScale::domain),
        y_primary_domain = ?scales.y_primary.map(LinearScale::domain),
        y_secondary_domain = ?scales.y_secondary.map(LinearScale::domain),
        "built chart scene"
    );

    Ok(ChartScene {
        frame,
        scales,
        markers,
        plot_area: plot,
    })
}

fn append_axes(
    frame: &mut RenderFrame,
    plot: PlotArea,
    scales: &ChartScales,
    config: &ChartConfig,
) {
    let bottom = AxisSpec::new(AxisOrient::Bottom, config.x_axis_color, config.axis_font_size_px)
        .with_ticks(
            scales
                .x
                .map(|scale| scale.labeled_ticks(config.x_tick_count, &config.date_format))
                .unwrap_or_default(),
        );

    let side = |orient, series| {
        AxisSpec::new(
            orient,
            config.series_style(series).color,
            config.axis_font_size_px,
        )
        .with_ticks(
            scales
                .y(series)
                .map(|scale| scale.labeled_ticks(config.y_tick_count))
                .unwrap_or_default(),
        )
    };
    let left = side(AxisOrient::Left, SeriesId::Primary);
    let right = side(AxisOrient::Right, SeriesId::Secondary);

    let layer = frame.layer_mut(LayerKind::Axis);
    for axis in [&right, &left, &bottom] {
        append_axis(layer, plot, axis);
    }
}

fn append_labels(frame: &mut RenderFrame, plot: PlotArea, config: &ChartConfig) {
    let x = plot.origin_x + plot.width / 2.0;
    let layer = frame.layer_mut(LayerKind::Labels);
    for series in SeriesId::ALL {
        let y = plot.bottom() + f64::from(config.margins.top) + config.label_offset(series);
        layer.texts.push(TextPrimitive::new(
            series.label(),
            x,
            y,
            config.label_font_size_px,
            config.series_style(series).color,
            TextHAlign::Center,
        ));
    }
}
