//! Core library for extracting color-accurate PNG snapshots from videos
//! using ffmpeg and ffprobe.
//!
//! A run probes the input's duration, resolution and color tags, samples
//! random timestamps between 5% and 35% of the duration, and decodes one
//! frame per timestamp with a scale filter pinned to the detected (or
//! forced) color matrix.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidsnap_core::{FfprobeCommandExecutor, SidecarSpawner, SnapshotConfigBuilder, take_snapshots};
//! use std::path::PathBuf;
//!
//! let config = SnapshotConfigBuilder::new()
//!     .input(PathBuf::from("/path/to/movie.mkv"))
//!     .count(5)
//!     .output_dir(PathBuf::from("/path/to/shots"))
//!     .build()
//!     .unwrap();
//!
//! let report = take_snapshots(
//!     &config,
//!     &SidecarSpawner,
//!     &FfprobeCommandExecutor::new().with_debug(config.debug),
//! )
//! .unwrap();
//! println!("{}", report.silent_output());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod processing;
pub mod reporting;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{SnapshotConfig, SnapshotConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{
    FfprobeCommandExecutor, FfmpegSpawner, FfprobeExecutor, SidecarSpawner, check_dependencies,
};
pub use media::{ColorSpace, Resolution, VideoMetadata};
pub use processing::take_snapshots;
pub use reporting::{SnapshotReport, SnapshotResult};
pub use utils::{check_input_file, format_timestamp};
