//! Metric source catalog.
//!
//! Defines the fixed set of sample metric sources: which file each one is
//! written to, which columns it carries, and the value range each column is
//! drawn from. The catalog is baked into the program; it is not loaded from
//! configuration.

use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the leading column every generated file carries.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// File extension of generated files, also used to recognize stale output
/// from prior runs.
pub const GENERATED_FILE_EXTENSION: &str = "csv";

/// An inclusive numeric range values are sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Smallest value the column may take.
    pub min: f64,
    /// Largest value the column may take.
    pub max: f64,
}

impl ValueRange {
    /// Creates a new value range.
    ///
    /// # Examples
    ///
    /// ```
    /// use metricgen::sources::ValueRange;
    ///
    /// let range = ValueRange::new(10.0, 95.0);
    /// assert!(range.contains(50.0));
    /// ```
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draws a uniform value from the range, rounded to one decimal place.
    ///
    /// Because range endpoints are themselves one-decimal values, rounding
    /// never pushes a sample outside the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round_to_tenth(rng.gen_range(self.min..=self.max))
    }

    /// Returns true if `value` lies within the range, inclusive.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Rounds to the nearest tenth, the precision all generated values use.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Errors produced when a source definition is inconsistent.
#[derive(Debug, Error)]
pub enum SourceSpecError {
    /// The column list and range list have different lengths.
    #[error("Source {path} defines {columns} columns but {ranges} value ranges")]
    ColumnRangeMismatch {
        /// Relative path of the offending source.
        path: &'static str,
        /// Number of configured columns.
        columns: usize,
        /// Number of configured ranges.
        ranges: usize,
    },

    /// A column's range has `min` greater than `max`.
    #[error("Source {path} column {column} has an empty value range")]
    EmptyRange {
        /// Relative path of the offending source.
        path: &'static str,
        /// Name of the offending column.
        column: &'static str,
    },
}

/// One metric source: an output file plus its column schema.
///
/// # Example
///
/// ```
/// use metricgen::sources::SOURCES;
///
/// let cpu = &SOURCES[0];
/// assert_eq!(cpu.relative_path, "cpu_metrics.csv");
/// assert_eq!(cpu.header(), ["timestamp", "usage_percent", "temperature"]);
/// ```
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Output path relative to the configured output directory.
    pub relative_path: &'static str,
    /// Column names after the leading timestamp column.
    pub columns: &'static [&'static str],
    /// Sampling range for each column, in column order.
    pub ranges: &'static [ValueRange],
}

impl SourceSpec {
    /// Resolves the full output path for this source under `output_dir`.
    #[must_use]
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.relative_path)
    }

    /// Header row for this source: `timestamp` followed by the configured
    /// columns.
    #[must_use]
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(TIMESTAMP_COLUMN);
        header.extend_from_slice(self.columns);
        header
    }

    /// Validates the source definition.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The column and range lists have different lengths
    /// - Any range has `min` greater than `max`
    pub fn validate(&self) -> Result<(), SourceSpecError> {
        if self.columns.len() != self.ranges.len() {
            return Err(SourceSpecError::ColumnRangeMismatch {
                path: self.relative_path,
                columns: self.columns.len(),
                ranges: self.ranges.len(),
            });
        }

        for (column, range) in self.columns.iter().zip(self.ranges) {
            if range.min > range.max {
                return Err(SourceSpecError::EmptyRange {
                    path: self.relative_path,
                    column,
                });
            }
        }

        Ok(())
    }
}

/// The fixed source catalog: three top-level files and one nested under
/// `subsystem/`.
pub const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        relative_path: "cpu_metrics.csv",
        columns: &["usage_percent", "temperature"],
        ranges: &[ValueRange::new(10.0, 95.0), ValueRange::new(35.0, 85.0)],
    },
    SourceSpec {
        relative_path: "memory_metrics.csv",
        columns: &["usage_mb"],
        ranges: &[ValueRange::new(512.0, 2048.0)],
    },
    SourceSpec {
        relative_path: "network_metrics.csv",
        columns: &["download_mbps", "upload_mbps", "latency_ms", "packet_loss"],
        ranges: &[
            ValueRange::new(0.5, 10.0),
            ValueRange::new(0.2, 5.0),
            ValueRange::new(5.0, 100.0),
            ValueRange::new(0.0, 5.0),
        ],
    },
    SourceSpec {
        relative_path: "subsystem/disk_metrics.csv",
        columns: &[
            "usage_percent",
            "read_mbps",
            "write_mbps",
            "iops",
            "queue_depth",
        ],
        ranges: &[
            ValueRange::new(50.0, 95.0),
            ValueRange::new(5.0, 120.0),
            ValueRange::new(2.0, 80.0),
            ValueRange::new(10.0, 500.0),
            ValueRange::new(0.0, 10.0),
        ],
    },
];
