use csv::ReaderBuilder;
use polars::prelude::DataFrame;

use crate::errors::LoaderError;
use crate::registry::DataLoader;

use super::{build_frame, text_series};

/// Eurostat's older wide export: a composed `unit,sex,age,geo\time` key in
/// the first column followed by one column per year.
///
/// Cells are kept as raw text, flags and missing-data markers included. Header
/// labels are not trimmed.
pub struct TsvLoader;

impl Default for TsvLoader {
    fn default() -> Self {
        Self
    }
}

impl TsvLoader {
    const NAME: &'static str = "TSV";

    fn csv_error(source: csv::Error) -> LoaderError {
        LoaderError::Csv {
            loader: Self::NAME,
            source,
        }
    }
}

impl DataLoader for TsvLoader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extension(&self) -> &'static str {
        ".tsv"
    }

    fn parse(&self, content: &[u8]) -> Result<DataFrame, LoaderError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(content);

        let headers = reader.headers().map_err(Self::csv_error)?.clone();
        if headers.is_empty() {
            return Err(LoaderError::InvalidLayout {
                loader: Self::NAME,
                reason: "missing header row".to_string(),
            });
        }

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record.map_err(Self::csv_error)?;
            for (column, field) in cells.iter_mut().zip(record.iter()) {
                column.push(Some(field.to_string()));
            }
        }

        let series = headers
            .iter()
            .zip(cells)
            .map(|(name, values)| text_series(name, values))
            .collect();
        build_frame(Self::NAME, series)
    }
}
