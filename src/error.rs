use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the record table.
///
/// Every variant is fatal: the quiz never runs on a partial table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: column '{column}' is empty")]
    EmptyField { row: usize, column: &'static str },

    #[error("row {row}: column '{column}' is not a finite number")]
    NonFinite { row: usize, column: &'static str },

    #[error("data table has no records")]
    EmptyTable,
}
