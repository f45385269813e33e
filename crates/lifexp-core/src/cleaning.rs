use lifexp_loader::{VALUE, YEAR};
use polars::prelude::*;
use tracing::debug;

use crate::error::{column, PipelineError, Result};

/// Parses a year label, ignoring surrounding whitespace (`"2021 "` is 2021).
pub fn parse_year_text(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Strips everything except ASCII digits and `.` before parsing, which drops
/// Eurostat flags (`"21.7 e"`, `"18.5*"`). A comma is dropped too, so `"20,5"`
/// becomes 205. Missing-data markers such as `":"` come out empty and fail.
pub fn clean_value_text(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn clean_year_column(years: &Column) -> Result<Series> {
    let cleaned: Vec<i64> = match years.dtype() {
        DataType::String => years
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, text)| {
                text.and_then(parse_year_text)
                    .ok_or_else(|| PipelineError::MalformedYear {
                        row,
                        value: text.unwrap_or("null").to_string(),
                    })
            })
            .collect::<Result<_>>()?,
        dtype if dtype.is_integer() => {
            let cast = years.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .enumerate()
                .map(|(row, year)| {
                    year.ok_or_else(|| PipelineError::MalformedYear {
                        row,
                        value: "null".to_string(),
                    })
                })
                .collect::<Result<_>>()?
        }
        dtype if dtype.is_float() => {
            let cast = years.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .enumerate()
                .map(|(row, year)| match year {
                    Some(year) if year.is_finite() && year.fract() == 0.0 => Ok(year as i64),
                    other => Err(PipelineError::MalformedYear {
                        row,
                        value: other.map_or_else(|| "null".to_string(), |y| y.to_string()),
                    }),
                })
                .collect::<Result<_>>()?
        }
        other => {
            return Err(PipelineError::UnsupportedColumnType {
                column: YEAR,
                dtype: other.to_string(),
            })
        }
    };
    Ok(Series::new(YEAR.into(), cleaned))
}

fn clean_value_column(values: &Column) -> Result<Series> {
    let cleaned: Vec<Option<f64>> = match values.dtype() {
        DataType::String => values
            .str()?
            .into_iter()
            .map(|text| text.and_then(clean_value_text))
            .collect(),
        dtype if dtype.is_integer() || dtype.is_float() || matches!(dtype, DataType::Null) => {
            let cast = values.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|value| value.filter(|v| v.is_finite() && *v >= 0.0))
                .collect()
        }
        other => {
            return Err(PipelineError::UnsupportedColumnType {
                column: VALUE,
                dtype: other.to_string(),
            })
        }
    };
    Ok(Series::new(VALUE.into(), cleaned))
}

/// Types `year` as `Int64` and `value` as `Float64`.
///
/// An unparseable year fails the whole table. An unparseable, negative or
/// non-finite value drops its row without error.
pub fn clean_types(df: &DataFrame) -> Result<DataFrame> {
    let year = clean_year_column(column(df, YEAR)?)?;
    let value = clean_value_column(column(df, VALUE)?)?;

    let mut typed = df.clone();
    typed.with_column(year)?;
    typed.with_column(value)?;

    let before = typed.height();
    let cleaned = typed.lazy().filter(col(VALUE).is_not_null()).collect()?;
    debug!(
        rows = cleaned.height(),
        dropped = before - cleaned.height(),
        "converted year to integer and value to float"
    );
    Ok(cleaned)
}
