//! Snapshot results and run summaries
//!
//! The extraction phase returns a `SnapshotReport` owning one
//! `SnapshotResult` per sampled timestamp, failed ones included.

use std::path::PathBuf;

use crate::media::{Resolution, VideoMetadata};

/// Outcome of a single extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotResult {
    /// 1-based position in the batch
    pub index: usize,
    /// Seek position in seconds
    pub timestamp: u64,
    /// Where the PNG was (or would have been) written
    pub path: PathBuf,
    /// Whether the PNG has the source video's resolution
    pub resolution_match: bool,
    /// Whether ffmpeg produced the file
    pub success: bool,
    /// Resolution observed in the produced file, if it could be probed
    pub resolution: Option<Resolution>,
    /// Failure description for unsuccessful extractions
    pub error: Option<String>,
}

impl SnapshotResult {
    #[must_use]
    pub fn failed(index: usize, timestamp: u64, path: PathBuf, error: String) -> Self {
        Self {
            index,
            timestamp,
            path,
            resolution_match: false,
            success: false,
            resolution: None,
            error: Some(error),
        }
    }
}

/// Results of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub metadata: VideoMetadata,
    pub results: Vec<SnapshotResult>,
}

impl SnapshotReport {
    /// Successful results, in batch order.
    pub fn produced(&self) -> impl Iterator<Item = &SnapshotResult> {
        self.results.iter().filter(|r| r.success)
    }

    #[must_use]
    pub fn produced_paths(&self) -> Vec<PathBuf> {
        self.produced().map(|r| r.path.clone()).collect()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }

    /// Produced snapshots whose resolution differs from the source.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.produced().filter(|r| !r.resolution_match).count()
    }

    /// The single line printed in silent mode: produced paths separated by
    /// spaces.
    #[must_use]
    pub fn silent_output(&self) -> String {
        self.produced()
            .map(|r| r.path.display().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
