//! Sample metrics data generator.
//!
//! Writes a fixed catalog of randomized time-series CSV files for demos and
//! pipeline testing. Every run replaces the previous one: stale generated
//! files are swept from the output directories, then each source is written
//! fresh with rows spaced a configurable interval apart and ending at the
//! current minute.
//!
//! # Examples
//!
//! ```no_run
//! use metricgen::config::GeneratorConfig;
//! use metricgen::generator;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = GeneratorConfig::new("./data")
//!         .with_num_points(50)
//!         .with_interval_seconds(30);
//!
//!     let summary = generator::generate(&config)?;
//!     println!("wrote {} files", summary.file_count());
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod generator;
pub mod sources;

pub use config::GeneratorConfig;
pub use generator::{generate, generate_with, GenerateError, RunSummary, SourceSummary};
pub use sources::{SourceSpec, ValueRange, SOURCES};

// Re-export chrono so callers can supply clock instants without pinning
// their own copy of the crate.
pub use chrono;
