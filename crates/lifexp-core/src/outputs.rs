use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use lifexp_loader::{LifeExpectancyRecord, AGE, CANONICAL_COLUMNS, REGION, SEX, UNIT, VALUE, YEAR};
use polars::prelude::{DataFrame, StringChunked};
use tracing::info;

use crate::country::Country;
use crate::error::{column, PipelineError, Result};

/// `{output_dir}/{code in lower case}_life_expectancy.csv`
pub fn output_path(output_dir: &Path, country: &Country) -> PathBuf {
    output_dir.join(format!(
        "{}_life_expectancy.csv",
        country.code().to_ascii_lowercase()
    ))
}

/// Reads a cleaned table back into records, in row order. Any null cell is an
/// error.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<LifeExpectancyRecord>> {
    let units = column(df, UNIT)?.str()?;
    let sexes = column(df, SEX)?.str()?;
    let ages = column(df, AGE)?.str()?;
    let regions = column(df, REGION)?.str()?;
    let years = column(df, YEAR)?.i64()?;
    let values = column(df, VALUE)?.f64()?;

    let text = |cells: &StringChunked, name: &'static str, row: usize| -> Result<String> {
        cells
            .get(row)
            .map(str::to_string)
            .ok_or(PipelineError::NullValue { column: name, row })
    };

    (0..df.height())
        .map(|row| -> Result<LifeExpectancyRecord> {
            let year = years
                .get(row)
                .ok_or(PipelineError::NullValue { column: YEAR, row })?;
            let value = values
                .get(row)
                .ok_or(PipelineError::NullValue { column: VALUE, row })?;
            Ok(LifeExpectancyRecord::new(
                text(units, UNIT, row)?,
                text(sexes, SEX, row)?,
                text(ages, AGE, row)?,
                text(regions, REGION, row)?,
                year,
                value,
            ))
        })
        .collect()
}

/// Writes the header and one line per row, without an index column. The
/// header is written even for an empty table.
pub fn write_csv<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let records = records_from_frame(df)?;
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(CANONICAL_COLUMNS)?;
    for record in &records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the cleaned table for `country` under `output_dir`, which must exist.
pub fn save_data(df: &DataFrame, country: &Country, output_dir: &Path) -> Result<PathBuf> {
    let path = output_path(output_dir, country);
    let file = File::create(&path)?;
    write_csv(df, BufWriter::new(file))?;
    info!(path = %path.display(), rows = df.height(), "saved cleaned data");
    Ok(path)
}
