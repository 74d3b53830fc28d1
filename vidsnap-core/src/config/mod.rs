//! Configuration structures and constants for the vidsnap-core library.
//!
//! This module provides the configuration for a snapshot run: how many
//! frames to grab, where to write them, and how frames are converted.

mod builder;
mod directory;
mod validation;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::CoreResult;
use crate::media::ColorSpace;

pub use builder::SnapshotConfigBuilder;
pub use directory::prepare_output_dir;
pub use validation::{validate_prefix, validate_snapshot_count};

// Default constants

/// Default number of snapshots taken from a video.
pub const DEFAULT_SNAPSHOT_COUNT: u32 = 3;

/// Default filename prefix for snapshot images.
pub const DEFAULT_PREFIX: &str = "snapshot";

/// Default pause between two consecutive ffmpeg invocations.
pub const DEFAULT_PACING_MS: u64 = 1000;

/// Pixel format used when `remove_pixfmt` is not set (8-bit RGB).
pub const FIXED_PIXEL_FORMAT: &str = "rgb24";

/// Main configuration structure for a snapshot run.
///
/// Built once by the consumer of the library (e.g. vidsnap-cli) and passed
/// by reference through every stage of the pipeline.
///
/// # Examples
///
/// ```rust,no_run
/// use vidsnap_core::config::SnapshotConfigBuilder;
/// use vidsnap_core::ColorSpace;
/// use std::path::PathBuf;
///
/// let config = SnapshotConfigBuilder::new()
///     .input(PathBuf::from("/videos/movie.mkv"))
///     .output_dir(PathBuf::from("/tmp/shots"))
///     .count(5)
///     .force_format(Some(ColorSpace::Bt709))
///     .prefix("movie")
///     .build()
///     .unwrap();
/// assert_eq!(config.count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Video file to take snapshots from
    pub input: PathBuf,

    /// Number of snapshots to extract (always >= 1)
    pub count: u32,

    /// Color matrix to use instead of probing the video
    pub force_format: Option<ColorSpace>,

    /// Skip the fixed 8-bit pixel-format conversion (allows 16-bit PNGs)
    pub remove_pixfmt: bool,

    /// Directory the PNG files are written to
    pub output_dir: PathBuf,

    /// Filename prefix for each snapshot
    pub prefix: String,

    /// Only print the produced paths
    pub silent: bool,

    /// Echo every external invocation before running it
    pub debug: bool,

    /// Pause between extractions
    pub pacing: Duration,

    /// Seed for reproducible timestamp sampling
    pub seed: Option<u64>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            count: DEFAULT_SNAPSHOT_COUNT,
            force_format: None,
            remove_pixfmt: false,
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            silent: false,
            debug: false,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            seed: None,
        }
    }
}

impl SnapshotConfig {
    /// Checks the values that can be validated without touching the
    /// filesystem or running external tools.
    pub fn validate(&self) -> CoreResult<()> {
        validate_snapshot_count(i64::from(self.count))?;
        validate_prefix(&self.prefix)?;
        Ok(())
    }

    /// Output path for a snapshot taken at `timestamp_secs`.
    #[must_use]
    pub fn snapshot_path(&self, timestamp_secs: u64) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", self.prefix, timestamp_secs))
    }
}
