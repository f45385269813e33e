use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("unsupported file format '{extension}'; supported formats: {}", supported.join(", "))]
    UnsupportedFormat {
        extension: String,
        supported: Vec<String>,
    },

    #[error("{loader} record {record_index} is missing field '{field}'")]
    MissingField {
        loader: &'static str,
        record_index: usize,
        field: &'static str,
    },

    #[error("{loader} record {record_index} has a null '{field}'")]
    NullField {
        loader: &'static str,
        record_index: usize,
        field: &'static str,
    },

    #[error("{loader} input is not a valid table: {reason}")]
    InvalidLayout {
        loader: &'static str,
        reason: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{loader} CSV error: {source}")]
    Csv {
        loader: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{loader} JSON error: {source}")]
    Json {
        loader: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{loader} failed to build table: {source}")]
    Table {
        loader: &'static str,
        #[source]
        source: polars::error::PolarsError,
    },
}
