use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two metrics plotted against the shared date axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesId {
    /// `dow_index`, drawn against the left axis.
    Primary,
    /// `smurf_sightings`, drawn against the right axis.
    Secondary,
}

impl SeriesId {
    pub const ALL: [SeriesId; 2] = [SeriesId::Primary, SeriesId::Secondary];

    /// CSV column the series is read from.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Primary => "dow_index",
            Self::Secondary => "smurf_sightings",
        }
    }

    /// Caption drawn under the plot area.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Dow Index Level",
            Self::Secondary => "Smurf Sightings",
        }
    }

    /// Marker class used to tag point markers for hover lookup.
    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::Primary => "dow_indexcircle",
            Self::Secondary => "smurf_sightingscircle",
        }
    }

    #[must_use]
    pub fn from_marker_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.marker_class() == class)
    }
}

/// One parsed data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    date: NaiveDate,
    primary_metric: i64,
    secondary_metric: i64,
}

impl Record {
    #[must_use]
    pub const fn new(date: NaiveDate, primary_metric: i64, secondary_metric: i64) -> Self {
        Self {
            date,
            primary_metric,
            secondary_metric,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn primary_metric(&self) -> i64 {
        self.primary_metric
    }

    #[must_use]
    pub const fn secondary_metric(&self) -> i64 {
        self.secondary_metric
    }

    #[must_use]
    pub const fn metric(&self, series: SeriesId) -> i64 {
        match series {
            SeriesId::Primary => self.primary_metric,
            SeriesId::Secondary => self.secondary_metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesId;

    #[test]
    fn marker_class_identifies_the_series() {
        for series in SeriesId::ALL {
            assert_eq!(SeriesId::from_marker_class(series.marker_class()), Some(series));
        }
        assert_eq!(SeriesId::from_marker_class("circle"), None);
    }
}
