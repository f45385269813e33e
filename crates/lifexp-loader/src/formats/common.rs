use polars::prelude::*;

use crate::errors::LoaderError;

pub(crate) fn text_series(name: &str, values: Vec<Option<String>>) -> Series {
    Series::new(name.into(), values)
}

pub(crate) fn build_frame(loader: &'static str, series: Vec<Series>) -> Result<DataFrame, LoaderError> {
    let columns: Vec<Column> = series.into_iter().map(Column::from).collect();
    DataFrame::new(columns).map_err(|source| LoaderError::Table { loader, source })
}
