use serde::{Deserialize, Serialize};

use crate::core::ticks::{format_linear_tick, linear_ticks, tick_step};
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a value domain onto a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to the middle of
/// the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Value axis anchored at zero and mapped bottom-up onto `height` pixels.
    pub fn zero_based_vertical(max: f64, height: f64) -> ChartResult<Self> {
        Self::new((0.0, max), (height, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`domain_to_pixel`](Self::domain_to_pixel).
    ///
    /// A degenerate domain inverts every pixel to the domain start.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.is_degenerate() {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }

    /// Ticks paired with their pixel position and display label.
    #[must_use]
    pub fn labeled_ticks(self, count: usize) -> Vec<(f64, String)> {
        let step = tick_step(self.domain_start, self.domain_end, count);
        self.ticks(count)
            .into_iter()
            .map(|value| (self.domain_to_pixel(value), format_linear_tick(value, step)))
            .collect()
    }
}
