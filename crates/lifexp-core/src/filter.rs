use lifexp_loader::REGION;
use polars::prelude::*;
use tracing::debug;

use crate::country::Country;
use crate::error::{column, Result};

/// Keeps the rows whose `region` equals `code` exactly. Order is preserved and
/// no match is not an error.
pub fn filter_region(df: &DataFrame, code: &str) -> Result<DataFrame> {
    column(df, REGION)?;
    let filtered = df
        .clone()
        .lazy()
        .filter(col(REGION).eq(lit(code)))
        .collect()?;
    debug!(region = code, rows = filtered.height(), "filtered table by region");
    Ok(filtered)
}

pub fn filter_country(df: &DataFrame, country: &Country) -> Result<DataFrame> {
    filter_region(df, country.code())
}
