use std::path::{Path, PathBuf};

use lifexp_loader::LoaderRegistry;
use polars::prelude::DataFrame;
use tracing::info;

use crate::cleaning::clean_types;
use crate::country::Country;
use crate::error::{PipelineError, Result, Stage};
use crate::filter::filter_country;
use crate::normalize::normalize_shape;
use crate::outputs::save_data;

/// Normalizes the shape, types the values and keeps the rows for `country`.
pub fn clean_data(df: &DataFrame, country: &Country) -> Result<DataFrame> {
    let long = normalize_shape(df)?;
    let typed = clean_types(&long)?;
    let cleaned = filter_country(&typed, country)?;
    info!(country = %country, rows = cleaned.height(), "completed cleaning");
    Ok(cleaned)
}

/// Load, clean and save with the default `.tsv` / `.json` loaders.
pub fn run(input_path: &Path, country: &Country, output_dir: &Path) -> Result<PathBuf> {
    run_with(&LoaderRegistry::default(), input_path, country, output_dir)
}

/// Load, clean and save, returning the path written. Any failure aborts the run
/// and is reported with its stage and the input path.
pub fn run_with(
    registry: &LoaderRegistry,
    input_path: &Path,
    country: &Country,
    output_dir: &Path,
) -> Result<PathBuf> {
    info!(input = %input_path.display(), country = %country, "starting run");

    let raw = registry
        .load(input_path)
        .map_err(|err| PipelineError::from(err).in_stage(Stage::Load, input_path))?;
    let cleaned =
        clean_data(&raw, country).map_err(|err| err.in_stage(Stage::Clean, input_path))?;
    save_data(&cleaned, country, output_dir).map_err(|err| err.in_stage(Stage::Save, input_path))
}
