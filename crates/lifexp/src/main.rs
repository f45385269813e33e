use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lifexp_core::Country;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT_FILE: &str = "life_expectancy/data/eu_life_expectancy_raw.tsv";
const DEFAULT_OUTPUT_DIR: &str = "life_expectancy/data";

/// Clean EU life expectancy data for one country.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Country code to filter the data by
    #[arg(long, default_value = "PT")]
    country: Country,

    /// Raw Eurostat export (.tsv or .json)
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input_file: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let written = lifexp_core::run(&cli.input_file, &cli.country, Path::new(DEFAULT_OUTPUT_DIR))
        .with_context(|| {
            format!(
                "failed to clean {} for {}",
                cli.input_file.display(),
                cli.country
            )
        })?;

    info!(path = %written.display(), "done");
    Ok(())
}
