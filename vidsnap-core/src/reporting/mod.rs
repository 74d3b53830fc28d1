//! Progress and result reporting.
//!
//! `Reporter` is the only place that decides what the user sees during a
//! run. In normal mode it prints sections, progress lines, warnings and a
//! summary through `terminal`; in silent mode it prints nothing and the
//! caller emits `SnapshotReport::silent_output` on stdout.

mod summary;

pub use summary::{SnapshotReport, SnapshotResult};

use std::path::Path;
use std::time::Duration;

use crate::config::SnapshotConfig;
use crate::media::{Resolution, VideoMetadata};
use crate::terminal;
use crate::utils::format_duration;

/// Output mode of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Normal,
    Silent,
}

/// Reports progress according to the configured verbosity.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
    debug: bool,
}

impl Reporter {
    #[must_use]
    pub fn new(verbosity: Verbosity, debug: bool) -> Self {
        Self { verbosity, debug }
    }

    #[must_use]
    pub fn from_config(config: &SnapshotConfig) -> Self {
        let verbosity = if config.silent {
            Verbosity::Silent
        } else {
            Verbosity::Normal
        };
        Self::new(verbosity, config.debug)
    }

    fn normal(&self) -> bool {
        self.verbosity == Verbosity::Normal
    }

    /// Echoes an external invocation in debug mode.
    pub fn command(&self, command_line: &str) {
        if self.debug {
            terminal::print_command(command_line);
        }
    }

    pub fn video_info(&self, input: &Path, metadata: &VideoMetadata) {
        if !self.normal() {
            return;
        }
        terminal::print_section("Video");
        terminal::print_status("Input file", &input.display().to_string(), false);
        terminal::print_status(
            "Duration",
            &format_duration(metadata.duration_secs as f64),
            false,
        );
        terminal::print_status("Resolution", &metadata.resolution.to_string(), false);
        terminal::print_status("Color space", &metadata.color_space.to_string(), false);
    }

    pub fn timestamps(&self, timestamps: &[u64]) {
        if !self.normal() {
            return;
        }
        terminal::print_section("Snapshots");
        let list = timestamps
            .iter()
            .map(|t| format!("{t}s"))
            .collect::<Vec<_>>()
            .join(", ");
        terminal::print_status("Timestamps", &list, false);
    }

    pub fn snapshot_started(&self, index: usize, total: usize, seek: &str) {
        if self.normal() {
            terminal::print_processing(&format!("Snapshot {index}/{total} at {seek}"));
        }
    }

    pub fn snapshot_succeeded(&self, result: &SnapshotResult) {
        if self.normal() {
            terminal::print_sub_item(&format!("Saved {}", result.path.display()));
        }
    }

    pub fn snapshot_failed(&self, result: &SnapshotResult) {
        if self.normal() {
            terminal::print_warning(result.error.as_deref().unwrap_or("Snapshot failed"));
        }
    }

    pub fn resolution_mismatch(&self, path: &Path, expected: Resolution, actual: Resolution) {
        if self.normal() {
            terminal::print_warning(&format!(
                "{} is {actual}, expected {expected}",
                path.display()
            ));
        }
    }

    pub fn resolution_unverified(&self, path: &Path, reason: &str) {
        if self.normal() {
            terminal::print_warning(&format!(
                "Could not verify resolution of {}: {reason}",
                path.display()
            ));
        }
    }

    /// Final human-readable summary (normal mode only).
    pub fn summary(&self, report: &SnapshotReport, elapsed: Duration) {
        if !self.normal() {
            return;
        }
        let produced = report.produced_paths();
        let failed = report.failed_count();

        terminal::print_section("Summary");
        if produced.is_empty() {
            terminal::print_error(
                "No snapshots produced",
                "Every extraction failed",
                Some("Re-run with --debug to see the ffmpeg invocations"),
            );
        } else {
            terminal::print_success(&format!(
                "Produced {} of {} snapshot(s)",
                produced.len(),
                report.results.len()
            ));
            for path in &produced {
                terminal::print_sub_item(&path.display().to_string());
            }
        }
        if failed > 0 {
            terminal::print_status("Failed", &failed.to_string(), true);
        }
        let mismatched = report.mismatch_count();
        if mismatched > 0 {
            terminal::print_status("Size mismatch", &mismatched.to_string(), true);
        }
        terminal::print_status("Total time", &format_duration(elapsed.as_secs_f64()), false);
    }
}
