//! Metricgen Binary
//!
//! Command-line entry point for the sample metrics data generator.
//!
//! # Usage
//!
//! ```bash
//! metricgen --help
//! metricgen
//! metricgen -n 50 -i 30 -o ./data
//! ```

#![deny(unsafe_code)]

use clap::Parser;
use metricgen::config::{DEFAULT_INTERVAL_SECONDS, DEFAULT_NUM_POINTS};
use metricgen::GeneratorConfig;
use std::path::PathBuf;

/// Metricgen - Generate sample metrics data
#[derive(Parser)]
#[command(name = "metricgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of data points to generate per file
    #[arg(short, long, env = "METRICGEN_NUM_POINTS", default_value_t = DEFAULT_NUM_POINTS)]
    num_points: u32,

    /// Time interval between data points in seconds
    #[arg(short, long, env = "METRICGEN_INTERVAL", default_value_t = DEFAULT_INTERVAL_SECONDS)]
    interval: u32,

    /// Output directory for generated files
    #[arg(short, long, env = "METRICGEN_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GeneratorConfig::new(cli.output_dir)
        .with_num_points(cli.num_points)
        .with_interval_seconds(cli.interval);

    let summary = metricgen::generate(&config)?;

    for source in &summary.sources {
        println!(
            "Generated {} data points in {} with columns: {}",
            source.points,
            source.path.display(),
            source.columns.join(", ")
        );
    }

    Ok(())
}
