//! Run configuration for the generator.
//!
//! Holds the three knobs a run exposes: where to write, how many data points
//! per file, and how far apart the points are in time.

use chrono::Duration;
use std::path::PathBuf;
use thiserror::Error;

/// Default number of data points per file.
pub const DEFAULT_NUM_POINTS: u32 = 100;

/// Default spacing between data points, in seconds.
pub const DEFAULT_INTERVAL_SECONDS: u32 = 15;

/// Longest total span a run may cover, in seconds.
///
/// `interval * (N - 1)` at the `u32` extremes would overflow timestamp
/// arithmetic; anything under this bound (roughly 253,000 years) subtracts
/// cleanly from a modern reference time.
pub const MAX_SPAN_SECONDS: i64 = 8_000_000_000_000;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured point count is zero.
    #[error("Point count must be greater than zero")]
    ZeroPoints,

    /// The configured interval is zero.
    #[error("Interval must be greater than zero")]
    ZeroInterval,

    /// The configured points span more time than timestamps can represent.
    #[error("Point count times interval exceeds the supported time span")]
    SpanTooLong,
}

/// Configuration for one generation run.
///
/// # Example
///
/// ```
/// use metricgen::GeneratorConfig;
///
/// let config = GeneratorConfig::new("./metrics_data")
///     .with_num_points(50)
///     .with_interval_seconds(30);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Destination root for generated files.
    pub output_dir: PathBuf,
    /// Number of data rows per file.
    pub num_points: u32,
    /// Seconds between consecutive rows.
    pub interval_seconds: u32,
}

impl GeneratorConfig {
    /// Creates a configuration writing into `output_dir` with the default
    /// point count and interval.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            num_points: DEFAULT_NUM_POINTS,
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
        }
    }

    /// Sets the number of data rows per file.
    #[must_use]
    pub fn with_num_points(mut self, num_points: u32) -> Self {
        self.num_points = num_points;
        self
    }

    /// Sets the spacing between consecutive rows, in seconds.
    #[must_use]
    pub fn with_interval_seconds(mut self, interval_seconds: u32) -> Self {
        self.interval_seconds = interval_seconds;
        self
    }

    /// Returns the row spacing as a `Duration`.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::seconds(i64::from(self.interval_seconds))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The point count is zero
    /// - The interval is zero
    /// - The total span exceeds [`MAX_SPAN_SECONDS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_points == 0 {
            return Err(ConfigError::ZeroPoints);
        }
        if self.interval_seconds == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        match i64::from(self.interval_seconds).checked_mul(i64::from(self.num_points - 1)) {
            Some(span) if span <= MAX_SPAN_SECONDS => Ok(()),
            _ => Err(ConfigError::SpanTooLong),
        }
    }
}

impl Default for GeneratorConfig {
    /// Returns the configuration a bare invocation uses: 100 points, 15
    /// seconds apart, written to the current directory.
    fn default() -> Self {
        Self::new(".")
    }
}
