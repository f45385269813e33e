//! Wide-to-long reshaping of the Eurostat TSV layout.
//!
//! The wide layout carries one row per `unit,sex,age,region` combination in a
//! composed first column, followed by one text column per year. The long
//! layout has one row per (combination, year) pair using the canonical
//! `unit, sex, age, region, year, value` columns.

use lifexp_loader::{CANONICAL_COLUMNS, METADATA_COLUMNS, YEAR};
use polars::prelude::*;
use tracing::debug;

use crate::error::{column, PipelineError, Result};

/// Helper column carrying the source row position through the un-pivot.
const SOURCE_ROW: &str = "__source_row";

/// A table is long when every canonical column is present.
pub fn is_long_format(df: &DataFrame) -> bool {
    CANONICAL_COLUMNS
        .iter()
        .all(|name| df.column(name).is_ok())
}

/// Splits the composed first column on `,` and appends the four metadata
/// columns. Keys that do not have exactly four parts are rejected.
pub fn split_metadata_columns(df: &DataFrame) -> Result<DataFrame> {
    let composed = df
        .get_columns()
        .first()
        .ok_or_else(|| PipelineError::MissingColumn("composed key".to_string()))?
        .cast(&DataType::String)?;

    let mut parts: [Vec<String>; 4] = Default::default();
    for (row, key) in composed.str()?.into_iter().enumerate() {
        let key = key.ok_or_else(|| PipelineError::MalformedKey {
            row,
            key: String::new(),
        })?;
        let fields: Vec<&str> = key.split(',').collect();
        let [unit, sex, age, region] = fields.as_slice() else {
            return Err(PipelineError::MalformedKey {
                row,
                key: key.to_string(),
            });
        };
        parts[0].push(unit.to_string());
        parts[1].push(sex.to_string());
        parts[2].push(age.to_string());
        parts[3].push(region.to_string());
    }

    let mut split = df.clone();
    for (name, values) in METADATA_COLUMNS.iter().zip(parts) {
        split.with_column(Series::new((*name).into(), values))?;
    }
    debug!(rows = split.height(), columns = split.width(), "split composed key into metadata columns");
    Ok(split)
}

/// Un-pivots every year column into `year` / `value` pairs.
///
/// Expects the layout produced by [`split_metadata_columns`]: the composed
/// column first, the year columns next, the four metadata columns last. Output
/// rows are grouped by source row, years in their left-to-right column order.
pub fn melt_years(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    if names.len() < 1 + METADATA_COLUMNS.len() {
        return Err(PipelineError::MissingColumn(format!(
            "expected a composed key and {} metadata columns, found {} columns",
            METADATA_COLUMNS.len(),
            names.len()
        )));
    }
    for name in METADATA_COLUMNS {
        column(df, name)?;
    }
    let year_labels: Vec<&str> = names[1..names.len() - METADATA_COLUMNS.len()]
        .iter()
        .map(String::as_str)
        .collect();
    if year_labels.is_empty() {
        // An empty `on` list would un-pivot every non-index column.
        let empty = CANONICAL_COLUMNS
            .iter()
            .map(|name| Column::new_empty((*name).into(), &DataType::String))
            .collect();
        return Ok(DataFrame::new(empty)?);
    }

    let mut wide = df.clone();
    for label in &year_labels {
        wide.with_column(column(df, label)?.cast(&DataType::String)?)?;
    }
    let wide = wide.with_row_index(SOURCE_ROW.into(), None)?;

    let index: Vec<&str> = std::iter::once(SOURCE_ROW).chain(METADATA_COLUMNS).collect();
    let mut long = wide
        .unpivot(year_labels.clone(), index)?
        .sort(
            [SOURCE_ROW],
            SortMultipleOptions::default().with_maintain_order(true),
        )?;
    long.rename("variable", YEAR.into())?;
    let long = long.select(CANONICAL_COLUMNS)?;

    debug!(
        source_rows = df.height(),
        year_columns = year_labels.len(),
        rows = long.height(),
        "melted year columns into long format"
    );
    Ok(long)
}

/// Brings any loader output to the canonical long layout. Long tables are only
/// projected onto the canonical column order.
pub fn normalize_shape(df: &DataFrame) -> Result<DataFrame> {
    if is_long_format(df) {
        debug!("table already in long format");
        return Ok(df.select(CANONICAL_COLUMNS)?);
    }
    melt_years(&split_metadata_columns(df)?)
}
