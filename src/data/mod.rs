//! CSV ingestion: raw text rows in, typed [`Record`]s out.
//!
//! The source must carry the columns `date`, `dow_index` and
//! `smurf_sightings` (exact, case-sensitive names). Extra columns are
//! ignored. Row order is preserved.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Record, SeriesId};
use crate::error::{ChartError, ChartResult, RecordError};

/// Format of the `date` column, e.g. `05-Jan-2022`.
pub const DATE_FORMAT: &str = "%d-%b-%Y";

pub const DATE_COLUMN: &str = "date";

pub const REQUIRED_COLUMNS: [&str; 3] = [
    DATE_COLUMN,
    SeriesId::Primary.column(),
    SeriesId::Secondary.column(),
];

/// One CSV row before any coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub dow_index: String,
    pub smurf_sightings: String,
}

impl RawRow {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        dow_index: impl Into<String>,
        smurf_sightings: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            dow_index: dow_index.into(),
            smurf_sightings: smurf_sightings.into(),
        }
    }
}

/// Converts one raw row into a record, reporting the first malformed field.
pub fn parse_row(row: &RawRow) -> Result<Record, RecordError> {
    let date = parse_date(&row.date)?;
    let primary = parse_metric(SeriesId::Primary.column(), &row.dow_index)?;
    let secondary = parse_metric(SeriesId::Secondary.column(), &row.smurf_sightings)?;
    Ok(Record::new(date, primary, secondary))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| RecordError::InvalidDate {
        value: value.to_owned(),
    })
}

fn parse_metric(column: &'static str, value: &str) -> Result<i64, RecordError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidMetric {
            column,
            value: value.to_owned(),
        })
}

/// What to do with a row whose fields fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Log the row, keep it in [`LoadOutcome::rejected`], continue.
    #[default]
    Skip,
    /// Fail the whole load on the first malformed row.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub row_policy: RowPolicy,
}

impl LoadOptions {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            row_policy: RowPolicy::Strict,
        }
    }
}

/// A row dropped under [`RowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line in the source, header included.
    pub line: u64,
    pub error: RecordError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedRow>,
}

/// Reads every row of a CSV stream into memory.
pub fn read_records<R: Read>(source: R, options: LoadOptions) -> ChartResult<LoadOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ChartError::MissingColumn(column.to_owned()));
        }
    }

    let mut outcome = LoadOutcome::default();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);
        let parsed = match check_field_count(&headers, &row) {
            Ok(()) => parse_row(&row.deserialize::<RawRow>(Some(&headers))?),
            Err(error) => Err(error),
        };

        match parsed {
            Ok(record) => outcome.records.push(record),
            Err(error) => match options.row_policy {
                RowPolicy::Strict => {
                    return Err(ChartError::InvalidRecord {
                        line,
                        source: error,
                    });
                }
                RowPolicy::Skip => {
                    warn!(line, error = %error, "skipping malformed row");
                    outcome.rejected.push(RejectedRow { line, error });
                }
            },
        }
    }

    debug!(
        records = outcome.records.len(),
        rejected = outcome.rejected.len(),
        "read csv records"
    );
    Ok(outcome)
}

/// Rows must carry exactly one field per header. A short row names the
/// first required column it lacks.
fn check_field_count(
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
) -> Result<(), RecordError> {
    if row.len() == headers.len() {
        return Ok(());
    }
    let missing = REQUIRED_COLUMNS.into_iter().find(|column| {
        headers
            .iter()
            .position(|header| header == *column)
            .is_some_and(|index| index >= row.len())
    });
    Err(match missing {
        Some(column) => RecordError::MissingField { column },
        None => RecordError::FieldCount {
            expected: headers.len(),
            found: row.len(),
        },
    })
}

/// Opens `path` and reads it with [`read_records`].
pub fn load_records(path: impl AsRef<Path>, options: LoadOptions) -> ChartResult<LoadOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChartError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading chart data");
    read_records(file, options)
}
