//! Chart assembly: configuration, scene building and the interactive view.

mod axis_builder;
mod chart_builder;
mod chart_config;
mod chart_view;

pub use axis_builder::{
    AXIS_LABEL_OFFSET_PX, AXIS_TICK_SIZE_PX, AxisOrient, AxisSpec, append_axis,
};
pub use chart_builder::{ChartScales, ChartScene, build_chart};
pub use chart_config::{ChartConfig, SeriesStyle, TooltipStyle};
pub use chart_view::ChartView;
pub use crate::interaction::MarkerHit;
