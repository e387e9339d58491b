//! Hover tooltip state and pointer hit-testing.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Record, SeriesId};
use crate::render::MarkerTag;

/// Extra pointer reach around a marker, in pixels.
pub const DEFAULT_HOVER_SLOP_PX: f64 = 2.0;

/// Hit-test entry for one drawn point marker, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerHit {
    pub tag: MarkerTag,
    pub record: Record,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl MarkerHit {
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.cx - x).hypot(self.cy - y)
    }
}

/// What the visible tooltip describes and where it was anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub series: SeriesId,
    pub record_index: usize,
    pub record: Record,
    /// Pointer position at marker entry, canvas coordinates.
    pub position: (f64, f64),
}

impl TooltipContent {
    /// Both metrics of the hovered record, one per line.
    #[must_use]
    pub fn text_lines(&self) -> [String; 2] {
        tooltip_lines(&self.record)
    }

    #[must_use]
    pub fn tag(&self) -> MarkerTag {
        MarkerTag {
            series: self.series,
            record_index: self.record_index,
        }
    }
}

/// Tooltip text for `record`: `dow_index: <v>` then `smurf_sightings: <v>`.
#[must_use]
pub fn tooltip_lines(record: &Record) -> [String; 2] {
    SeriesId::ALL.map(|series| format!("{}: {}", series.column(), record.metric(series)))
}

/// Single shared tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown(TooltipContent),
}

impl TooltipState {
    #[must_use]
    pub fn show(
        self,
        series: SeriesId,
        record_index: usize,
        record: Record,
        position: (f64, f64),
    ) -> Self {
        Self::Shown(TooltipContent {
            series,
            record_index,
            record,
            position,
        })
    }

    #[must_use]
    pub fn hide(self) -> Self {
        Self::Hidden
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        match self {
            Self::Shown(content) => Some(content),
            Self::Hidden => None,
        }
    }
}

/// Nearest marker reachable from `(x, y)`.
///
/// A marker is reachable when the pointer lies within `radius + slop` of its
/// center. At equal distance the marker drawn last wins, matching what the
/// pointer visually lands on.
#[must_use]
pub fn hit_test(markers: &[MarkerHit], x: f64, y: f64, slop: f64) -> Option<&MarkerHit> {
    let candidates: SmallVec<[(usize, f64); 4]> = markers
        .iter()
        .enumerate()
        .filter_map(|(index, marker)| {
            let distance = marker.distance_to(x, y);
            (distance <= marker.radius + slop).then_some((index, distance))
        })
        .collect();

    candidates
        .into_iter()
        .min_by_key(|(index, distance)| (OrderedFloat(*distance), Reverse(*index)))
        .map(|(index, _)| &markers[index])
}

/// Turns raw pointer motion into tooltip transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTracker {
    hover_slop_px: f64,
    state: TooltipState,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HOVER_SLOP_PX)
    }
}

impl HoverTracker {
    #[must_use]
    pub fn new(hover_slop_px: f64) -> Self {
        Self {
            hover_slop_px: hover_slop_px.max(0.0),
            state: TooltipState::Hidden,
        }
    }

    #[must_use]
    pub fn hover_slop_px(&self) -> f64 {
        self.hover_slop_px
    }

    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Updates the tooltip for a pointer at `(x, y)`; returns whether it changed.
    pub fn pointer_move(&mut self, x: f64, y: f64, markers: &[MarkerHit]) -> bool {
        match hit_test(markers, x, y, self.hover_slop_px) {
            Some(hit) => self.marker_enter(hit, (x, y)),
            None => self.marker_leave(),
        }
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.marker_leave()
    }

    /// Shows the tooltip for `hit`; re-entering the marker already shown
    /// keeps the original anchor.
    pub fn marker_enter(&mut self, hit: &MarkerHit, position: (f64, f64)) -> bool {
        if self
            .state
            .content()
            .is_some_and(|content| content.tag() == hit.tag)
        {
            return false;
        }

        trace!(
            series = hit.tag.series.column(),
            record_index = hit.tag.record_index,
            x = position.0,
            y = position.1,
            "tooltip shown"
        );
        self.state = self
            .state
            .show(hit.tag.series, hit.tag.record_index, hit.record, position);
        true
    }

    pub fn marker_leave(&mut self) -> bool {
        if !self.state.is_shown() {
            return false;
        }
        trace!("tooltip hidden");
        self.state = self.state.hide();
        true
    }
}
