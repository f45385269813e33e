// crates/lifexp-core/src/error.rs

use std::fmt;
use std::path::{Path, PathBuf};

use lifexp_loader::LoaderError;
use polars::prelude::{Column, DataFrame};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Clean,
    Save,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::Clean => "clean",
            Stage::Save => "save",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error("row {row}: composed key '{key}' must split into unit,sex,age,region")]
    MalformedKey { row: usize, key: String },

    #[error("row {row}: year '{value}' is not an integer")]
    MalformedYear { row: usize, value: String },

    #[error("row {row}: column '{column}' is null")]
    NullValue { column: &'static str, row: usize },

    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedColumnType { column: &'static str, dtype: String },

    #[error("table has no '{0}' column")]
    MissingColumn(String),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{stage} stage failed for {}", path.display())]
    Stage {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn in_stage(self, stage: Stage, path: &Path) -> Self {
        PipelineError::Stage {
            stage,
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

pub(crate) fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| PipelineError::MissingColumn(name.to_string()))
}
