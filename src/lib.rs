//! dual-axis-chart: a two-axis time-series line chart built from CSV.
//!
//! The pipeline loads records ([`data`]), fits one time scale and two value
//! scales, lays out axes, lines, captions and point markers into a
//! backend-agnostic [`render::RenderFrame`] ([`api::build_chart`]), and
//! drives a hover tooltip through [`api::ChartView`].

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartScene, ChartView, build_chart};
pub use data::{LoadOptions, LoadOutcome, RowPolicy, load_records, read_records};
pub use error::{ChartError, ChartResult, RecordError};
