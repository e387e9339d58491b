use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::render::{Color, FrameLayer, LinePrimitive, TextHAlign, TextPrimitive};

/// Length of inner and outer tick marks.
pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
/// Gap between the axis line and the tick label anchor.
pub const AXIS_LABEL_OFFSET_PX: f64 = 9.0;
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;

/// Vertical shift from a label's anchor to its baseline, in ems.
const BOTTOM_LABEL_BASELINE_EM: f64 = 0.71;
const SIDE_LABEL_BASELINE_EM: f64 = 0.32;

/// Which edge of the plot area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    Bottom,
    Left,
    Right,
}

/// One axis ready to be laid out: ticks are `(plot-space pixel, label)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    pub color: Color,
    pub font_size_px: f64,
    pub ticks: Vec<(f64, String)>,
}

impl AxisSpec {
    #[must_use]
    pub fn new(orient: AxisOrient, color: Color, font_size_px: f64) -> Self {
        Self {
            orient,
            color,
            font_size_px,
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = ticks;
        self
    }
}

/// Appends the domain line, outer ticks, tick marks and tick labels of `axis`.
///
/// An axis without ticks still draws its domain line and outer ticks, so a
/// chart with no data keeps its frame.
pub fn append_axis(layer: &mut FrameLayer, plot: PlotArea, axis: &AxisSpec) {
    let stroke = |x1: f64, y1: f64, x2: f64, y2: f64| {
        LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH_PX, axis.color)
    };

    match axis.orient {
        AxisOrient::Bottom => {
            let y = plot.bottom();
            let (left, right) = (plot.origin_x, plot.right());
            layer.lines.push(stroke(left, y, right, y));
            layer.lines.push(stroke(left, y, left, y + AXIS_TICK_SIZE_PX));
            layer.lines.push(stroke(right, y, right, y + AXIS_TICK_SIZE_PX));

            let baseline = y + AXIS_LABEL_OFFSET_PX + BOTTOM_LABEL_BASELINE_EM * axis.font_size_px;
            for (px, label) in &axis.ticks {
                let x = plot.origin_x + px;
                layer.lines.push(stroke(x, y, x, y + AXIS_TICK_SIZE_PX));
                push_label(layer, axis, label, x, baseline, TextHAlign::Center);
            }
        }
        AxisOrient::Left | AxisOrient::Right => {
            let (x, direction, align) = if axis.orient == AxisOrient::Left {
                (plot.origin_x, -1.0, TextHAlign::Right)
            } else {
                (plot.right(), 1.0, TextHAlign::Left)
            };
            let (top, bottom) = (plot.origin_y, plot.bottom());
            let outer = x + direction * AXIS_TICK_SIZE_PX;
            layer.lines.push(stroke(x, top, x, bottom));
            layer.lines.push(stroke(x, top, outer, top));
            layer.lines.push(stroke(x, bottom, outer, bottom));

            let label_x = x + direction * AXIS_LABEL_OFFSET_PX;
            for (px, label) in &axis.ticks {
                let y = plot.origin_y + px;
                layer.lines.push(stroke(x, y, outer, y));
                let baseline = y + SIDE_LABEL_BASELINE_EM * axis.font_size_px;
                push_label(layer, axis, label, label_x, baseline, align);
            }
        }
    }
}

fn push_label(
    layer: &mut FrameLayer,
    axis: &AxisSpec,
    label: &str,
    x: f64,
    y: f64,
    h_align: TextHAlign,
) {
    if label.is_empty() {
        return;
    }
    layer.texts.push(TextPrimitive::new(
        label,
        x,
        y,
        axis.font_size_px,
        axis.color,
        h_align,
    ));
}
