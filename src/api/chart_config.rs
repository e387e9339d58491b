use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, SeriesId, Viewport};
use crate::data::DATE_FORMAT;
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_HOVER_SLOP_PX;
use crate::render::Color;

/// Colors used for one series across line, markers, axis, label and tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl SeriesStyle {
    #[must_use]
    pub const fn solid(color: Color, tooltip_text: Color) -> Self {
        Self {
            color,
            tooltip_background: color,
            tooltip_text,
        }
    }

    fn validate(self) -> ChartResult<()> {
        self.color.validate()?;
        self.tooltip_background.validate()?;
        self.tooltip_text.validate()
    }
}

/// Layout of the tooltip overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    #[serde(default = "default_tooltip_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_tooltip_padding_px")]
    pub padding_px: f64,
    #[serde(default = "default_tooltip_corner_radius_px")]
    pub corner_radius_px: f64,
    /// Offset from the pointer anchor to the box's top-left corner.
    #[serde(default = "default_tooltip_offset_px")]
    pub offset_px: (f64, f64),
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font_size_px: default_tooltip_font_size_px(),
            padding_px: default_tooltip_padding_px(),
            corner_radius_px: default_tooltip_corner_radius_px(),
            offset_px: default_tooltip_offset_px(),
        }
    }
}

/// Chart layout and styling.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Distance of each series caption below the plot bottom, after the top
    /// margin is added once more.
    #[serde(default = "default_label_offsets_px")]
    pub label_offsets_px: (f64, f64),
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_hover_slop_px")]
    pub hover_slop_px: f64,
    #[serde(default = "default_axis_color")]
    pub x_axis_color: Color,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_primary_style")]
    pub primary_style: SeriesStyle,
    #[serde(default = "default_secondary_style")]
    pub secondary_style: SeriesStyle,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            marker_radius_px: default_marker_radius_px(),
            line_width_px: default_line_width_px(),
            y_tick_count: default_tick_count(),
            x_tick_count: default_tick_count(),
            axis_font_size_px: default_axis_font_size_px(),
            label_font_size_px: default_label_font_size_px(),
            label_offsets_px: default_label_offsets_px(),
            date_format: default_date_format(),
            hover_slop_px: default_hover_slop_px(),
            x_axis_color: default_axis_color(),
            background: default_background(),
            primary_style: default_primary_style(),
            secondary_style: default_secondary_style(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ChartError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&input)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        PlotArea::from_viewport(self.viewport, self.margins).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "margins {:?} leave no plot area inside {}x{}",
                self.margins, self.viewport.width, self.viewport.height
            ))
        })
    }

    #[must_use]
    pub fn series_style(&self, series: SeriesId) -> SeriesStyle {
        match series {
            SeriesId::Primary => self.primary_style,
            SeriesId::Secondary => self.secondary_style,
        }
    }

    #[must_use]
    pub fn label_offset(&self, series: SeriesId) -> f64 {
        match series {
            SeriesId::Primary => self.label_offsets_px.0,
            SeriesId::Secondary => self.label_offsets_px.1,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;

        for (name, value) in [
            ("marker radius", self.marker_radius_px),
            ("line width", self.line_width_px),
            ("axis font size", self.axis_font_size_px),
            ("label font size", self.label_font_size_px),
            ("tooltip font size", self.tooltip.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("hover slop", self.hover_slop_px),
            ("tooltip padding", self.tooltip.padding_px),
            ("tooltip corner radius", self.tooltip.corner_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        if [
            self.label_offsets_px.0,
            self.label_offsets_px.1,
            self.tooltip.offset_px.0,
            self.tooltip.offset_px.1,
        ]
        .iter()
        .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "label and tooltip offsets must be finite".to_owned(),
            ));
        }

        if self.y_tick_count == 0 || self.x_tick_count == 0 {
            return Err(ChartError::InvalidData("tick counts must be > 0".to_owned()));
        }
        if self.date_format.trim().is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ChartError::InvalidData(format!(
                "date format `{}` is not a valid strftime pattern",
                self.date_format
            )));
        }

        self.x_axis_color.validate()?;
        self.background.validate()?;
        self.primary_style.validate()?;
        self.secondary_style.validate()
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(960, 660)
}

fn default_marker_radius_px() -> f64 {
    3.0
}

fn default_line_width_px() -> f64 {
    1.5
}

fn default_tick_count() -> usize {
    10
}

fn default_axis_font_size_px() -> f64 {
    12.0
}

fn default_label_font_size_px() -> f64 {
    16.0
}

fn default_label_offsets_px() -> (f64, f64) {
    (20.0, 40.0)
}

fn default_date_format() -> String {
    DATE_FORMAT.to_owned()
}

fn default_hover_slop_px() -> f64 {
    DEFAULT_HOVER_SLOP_PX
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_primary_style() -> SeriesStyle {
    SeriesStyle::solid(Color::GREEN, Color::WHITE)
}

fn default_secondary_style() -> SeriesStyle {
    SeriesStyle::solid(Color::BLUE, Color::WHITE)
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}

fn default_tooltip_padding_px() -> f64 {
    6.0
}

fn default_tooltip_corner_radius_px() -> f64 {
    4.0
}

fn default_tooltip_offset_px() -> (f64, f64) {
    (12.0, 12.0)
}
