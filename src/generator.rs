//! Sample data generation.
//!
//! A run is one straight-line pass: make sure the output directories exist,
//! sweep stale generated files out of them, then write every catalog source
//! as a fresh CSV file whose rows end at the shared reference timestamp.

use crate::config::{ConfigError, GeneratorConfig};
use crate::sources::{SourceSpec, SourceSpecError, GENERATED_FILE_EXTENSION, SOURCES};
use chrono::{DateTime, Duration, DurationRound, Utc};
use rand::Rng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Format of row timestamps: ISO-8601 UTC without fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Errors that can occur during a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The run configuration failed validation.
    #[error("Invalid run configuration: {0}")]
    Config(#[from] ConfigError),

    /// A catalog entry failed validation.
    #[error("Invalid source definition: {0}")]
    Source(#[from] SourceSpecError),

    /// An output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An output directory could not be listed during the stale-file sweep.
    #[error("Failed to scan output directory {}: {source}", path.display())]
    ScanDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A stale generated file could not be removed.
    #[error("Failed to remove stale file {}: {source}", path.display())]
    RemoveStale {
        /// File that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A source file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteSource {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying CSV or I/O error.
        source: csv::Error,
    },

    /// The reference timestamp could not be truncated to the minute.
    #[error("Failed to truncate reference timestamp: {0}")]
    Truncate(#[from] chrono::RoundingError),
}

/// What was written for one source.
#[derive(Debug, Clone)]
pub struct SourceSummary {
    /// Full path of the generated file.
    pub path: PathBuf,
    /// Number of data rows written, excluding the header.
    pub points: u32,
    /// Header columns, timestamp first.
    pub columns: Vec<String>,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Reference timestamp shared by every source; the last row of each file
    /// carries it.
    pub reference: DateTime<Utc>,
    /// Per-source outcomes, in catalog order.
    pub sources: Vec<SourceSummary>,
}

impl RunSummary {
    /// Number of files written.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.sources.len()
    }

    /// Total number of data rows across all files.
    #[must_use]
    pub fn total_points(&self) -> u64 {
        self.sources.iter().map(|s| u64::from(s.points)).sum()
    }
}

/// Runs the generator with the ambient clock and RNG.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation
/// - An output directory cannot be created or swept
/// - A source file cannot be written
pub fn generate(config: &GeneratorConfig) -> Result<RunSummary, GenerateError> {
    generate_with(config, &mut rand::thread_rng(), Utc::now())
}

/// Runs the generator with a caller-supplied RNG and clock instant.
///
/// `now` is truncated to the whole minute and becomes the reference
/// timestamp, so passing a fixed instant (together with a seeded RNG) makes
/// a run fully deterministic.
///
/// # Errors
///
/// Same conditions as [`generate`].
pub fn generate_with<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<RunSummary, GenerateError> {
    config.validate()?;
    for spec in SOURCES {
        spec.validate()?;
    }

    tracing::info!(
        output_dir = %config.output_dir.display(),
        num_points = config.num_points,
        interval_seconds = config.interval_seconds,
        "Generating sample metrics data"
    );

    let dirs = output_dirs(&config.output_dir);
    for dir in &dirs {
        ensure_dir(dir)?;
    }

    let removed = sweep_stale_files(&dirs)?;
    if removed > 0 {
        tracing::info!(removed, "Cleared stale generated files");
    }

    let reference = now.duration_trunc(Duration::minutes(1))?;

    let mut sources = Vec::with_capacity(SOURCES.len());
    for spec in SOURCES {
        let path = spec.output_path(&config.output_dir);
        write_source(&path, spec, reference, config, rng).map_err(|source| {
            GenerateError::WriteSource {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            points = config.num_points,
            path = %path.display(),
            "Wrote source file"
        );

        sources.push(SourceSummary {
            path,
            points: config.num_points,
            columns: spec.header().into_iter().map(String::from).collect(),
        });
    }

    tracing::info!(
        files = sources.len(),
        reference = %reference.format(TIMESTAMP_FORMAT),
        "Generation complete"
    );

    Ok(RunSummary { reference, sources })
}

/// Distinct directories the catalog writes into, output root first.
fn output_dirs(output_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![output_dir.to_path_buf()];
    for spec in SOURCES {
        if let Some(parent) = spec.output_path(output_dir).parent() {
            if !dirs.iter().any(|d| d == parent) {
                dirs.push(parent.to_path_buf());
            }
        }
    }
    dirs
}

/// Creates a directory if absent; succeeds if it already exists.
fn ensure_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Ensured output directory");
    Ok(())
}

/// Removes every generated-suffix file directly inside the given directories
/// and returns how many were removed. Does not recurse.
fn sweep_stale_files(dirs: &[PathBuf]) -> Result<usize, GenerateError> {
    let mut removed = 0;
    for dir in dirs {
        let entries = fs::read_dir(dir).map_err(|source| GenerateError::ScanDir {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| GenerateError::ScanDir {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_generated = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == GENERATED_FILE_EXTENSION);
            if is_generated {
                fs::remove_file(&path).map_err(|source| GenerateError::RemoveStale {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "Removed stale generated file");
                removed += 1;
            }
        }
    }
    Ok(removed)
}

/// Writes one source file: a header row, then `num_points` rows at fixed
/// spacing, oldest first, ending at the reference timestamp.
fn write_source<R: Rng>(
    path: &Path,
    spec: &SourceSpec,
    reference: DateTime<Utc>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let header = spec.header();
    writer.write_record(&header)?;

    // Oldest row first; the last row lands exactly on the reference.
    let interval = config.interval();
    let span = Duration::seconds(
        i64::from(config.interval_seconds) * i64::from(config.num_points.saturating_sub(1)),
    );
    let mut timestamp = reference - span;

    for _ in 0..config.num_points {
        let mut row = Vec::with_capacity(header.len());
        row.push(timestamp.format(TIMESTAMP_FORMAT).to_string());
        for range in spec.ranges {
            row.push(format!("{:.1}", range.sample(rng)));
        }
        writer.write_record(&row)?;

        timestamp += interval;
    }

    writer.flush()?;
    Ok(())
}
