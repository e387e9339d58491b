use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::ticks::tick_step;
use crate::error::{ChartError, ChartResult};

const DAY: f64 = 1.0;
const WEEK: f64 = 7.0;
const MONTH: f64 = 30.0;
const YEAR: f64 = 365.0;

/// Calendar interval used to place time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickInterval {
    /// Every `n`-th day of the month, counting from the 1st.
    Days(u32),
    /// Sundays.
    Week,
    /// First day of every `n`-th month, counting from January.
    Months(u32),
    /// January 1st of years divisible by `n`.
    Years(u32),
}

impl TickInterval {
    const LADDER: [(TickInterval, f64); 6] = [
        (TickInterval::Days(1), DAY),
        (TickInterval::Days(2), 2.0 * DAY),
        (TickInterval::Week, WEEK),
        (TickInterval::Months(1), MONTH),
        (TickInterval::Months(3), 3.0 * MONTH),
        (TickInterval::Years(1), YEAR),
    ];

    /// Picks the interval whose nominal length is closest to `span_days / count`.
    #[must_use]
    pub fn for_span(span_days: f64, count: usize) -> Self {
        let count = count.max(1) as f64;
        let target = span_days.abs() / count;
        let upper = Self::LADDER.partition_point(|(_, length)| *length <= target);

        if upper == 0 {
            return TickInterval::Days(1);
        }
        if upper == Self::LADDER.len() {
            let years = tick_step(0.0, span_days.abs() / YEAR, count as usize)
                .round()
                .max(1.0);
            return TickInterval::Years(years as u32);
        }

        let (below, below_len) = Self::LADDER[upper - 1];
        let (above, above_len) = Self::LADDER[upper];
        if target / below_len < above_len / target {
            below
        } else {
            above
        }
    }

    fn contains(self, date: NaiveDate) -> bool {
        match self {
            TickInterval::Days(n) => (date.day() - 1) % n.max(1) == 0,
            TickInterval::Week => date.weekday() == Weekday::Sun,
            TickInterval::Months(n) => date.day() == 1 && date.month0() % n.max(1) == 0,
            TickInterval::Years(n) => {
                date.day() == 1 && date.month() == 1 && date.year().rem_euclid(n.max(1) as i32) == 0
            }
        }
    }

    /// Aligned boundaries inside `[start, end]`, in ascending order.
    #[must_use]
    pub fn range(self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if end < start {
            return Vec::new();
        }

        let mut out = Vec::new();
        match self {
            TickInterval::Days(_) | TickInterval::Week => {
                let mut current = Some(start);
                while let Some(date) = current.filter(|date| *date <= end) {
                    if self.contains(date) {
                        out.push(date);
                    }
                    current = date.checked_add_days(Days::new(1));
                }
            }
            TickInterval::Months(_) => {
                let mut current = start.with_day(1);
                while let Some(date) = current.filter(|date| *date <= end) {
                    if date >= start && self.contains(date) {
                        out.push(date);
                    }
                    current = date.checked_add_months(Months::new(1));
                }
            }
            TickInterval::Years(_) => {
                out.extend(
                    (start.year()..=end.year())
                        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                        .filter(|date| *date >= start && *date <= end && self.contains(*date)),
                );
            }
        }
        out
    }
}

/// Calendar-date axis mapped linearly in days onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    #[must_use]
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self {
            start: domain.0,
            end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    /// Fits the domain to `[min(date), max(date)]`; `None` when `dates` is empty.
    #[must_use]
    pub fn from_extent<I>(dates: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut dates = dates.into_iter();
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });
        Some(Self::new((min, max), range))
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn span_days(self) -> i64 {
        (self.end - self.start).num_days()
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(
            (
                f64::from(self.start.num_days_from_ce()),
                f64::from(self.end.num_days_from_ce()),
            ),
            (self.range_start, self.range_end),
        )
    }

    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        let span = self.span_days() as f64;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (date - self.start).num_days() as f64 / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Nearest calendar date for a pixel position.
    pub fn pixel_to_date(self, pixel: f64) -> ChartResult<NaiveDate> {
        let days = self.linear()?.pixel_to_domain(pixel).round() as i64;
        let offset = days - i64::from(self.start.num_days_from_ce());
        let shifted = if offset >= 0 {
            self.start.checked_add_days(Days::new(offset as u64))
        } else {
            self.start.checked_sub_days(Days::new(offset.unsigned_abs()))
        };
        shifted.ok_or_else(|| ChartError::InvalidData("pixel maps outside the calendar".to_owned()))
    }

    #[must_use]
    pub fn tick_interval(self, count: usize) -> TickInterval {
        TickInterval::for_span(self.span_days() as f64, count)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        self.tick_interval(count).range(lo, hi)
    }

    /// Ticks paired with their pixel position and a label in `format`.
    #[must_use]
    pub fn labeled_ticks(self, count: usize, format: &str) -> Vec<(f64, String)> {
        self.ticks(count)
            .into_iter()
            .map(|date| (self.date_to_pixel(date), date.format(format).to_string()))
            .collect()
    }
}
