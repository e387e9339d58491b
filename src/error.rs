use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to open data source `{}`: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("invalid record on line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: RecordError,
    },

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-field failure raised while converting one CSV row into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("date `{value}` does not match DD-Mon-YYYY")]
    InvalidDate { value: String },

    #[error("column `{column}` value `{value}` is not an integer")]
    InvalidMetric { column: &'static str, value: String },

    #[error("row has no value for column `{column}`")]
    MissingField { column: &'static str },

    #[error("row has {found} fields, header has {expected}")]
    FieldCount { expected: usize, found: usize },
}
