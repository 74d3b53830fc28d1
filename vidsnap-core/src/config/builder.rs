// ============================================================================
// vidsnap-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for SnapshotConfig
//
// Fluent construction of a SnapshotConfig. `build()` runs the same
// validation as `SnapshotConfig::validate`, so a built config is always
// usable by the pipeline.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::SnapshotConfig;
use crate::error::CoreResult;
use crate::media::ColorSpace;

/// Builder for creating SnapshotConfig instances.
#[derive(Debug, Clone, Default)]
pub struct SnapshotConfigBuilder {
    config: SnapshotConfig,
}

impl SnapshotConfigBuilder {
    /// Creates a new builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input video file.
    #[must_use]
    pub fn input(mut self, input: PathBuf) -> Self {
        self.config.input = input;
        self
    }

    /// Sets the number of snapshots.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.config.count = count;
        self
    }

    /// Forces a color matrix, bypassing detection.
    #[must_use]
    pub fn force_format(mut self, format: Option<ColorSpace>) -> Self {
        self.config.force_format = format;
        self
    }

    /// Omits the fixed pixel-format conversion.
    #[must_use]
    pub fn remove_pixfmt(mut self, remove: bool) -> Self {
        self.config.remove_pixfmt = remove;
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output_dir = dir;
        self
    }

    /// Sets the filename prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn silent(mut self, silent: bool) -> Self {
        self.config.silent = silent;
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Sets the pause between extractions.
    #[must_use]
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.config.pacing = pacing;
        self
    }

    /// Seeds the timestamp sampler.
    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> CoreResult<SnapshotConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
