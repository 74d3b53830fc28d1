// ============================================================================
// vidsnap-core/src/processing/snapshot.rs
// ============================================================================
//
// SNAPSHOT EXTRACTION: One PNG per sampled timestamp
//
// Each timestamp is decoded by a separate ffmpeg invocation. A failed
// decode is recorded in its SnapshotResult and the batch carries on; a
// produced PNG whose resolution differs from the source is kept and only
// flagged.
//
// WORKFLOW (per timestamp):
// 1. Build the output path and the ffmpeg command
// 2. Echo the invocation in debug mode
// 3. Run ffmpeg to completion and confirm the file exists
// 4. Re-probe the file's resolution and compare with the source

use std::path::Path;
use std::thread;

use ffmpeg_sidecar::command::FfmpegCommand;

use crate::config::SnapshotConfig;
use crate::error::CoreError;
use crate::external::{
    FfmpegSpawner, FfprobeExecutor, SnapshotCommandBuilder, ffmpeg_program, format_command,
    run_to_completion,
};
use crate::media::VideoMetadata;
use crate::reporting::{Reporter, SnapshotResult};
use crate::utils::format_timestamp;

/// Shell-style rendering of the exact ffmpeg invocation.
fn render_invocation(cmd: &FfmpegCommand) -> String {
    let program = ffmpeg_program();
    let args: Vec<_> = cmd.get_args().collect();
    format_command(&program.to_string_lossy(), &args)
}

/// Extracts the snapshot at `timestamp` (1-based `index` of `total`).
///
/// Never fails: problems are carried in the returned result.
#[allow(clippy::too_many_arguments)]
pub fn extract_snapshot<S: FfmpegSpawner, P: FfprobeExecutor>(
    config: &SnapshotConfig,
    metadata: &VideoMetadata,
    spawner: &S,
    prober: &P,
    reporter: &Reporter,
    index: usize,
    total: usize,
    timestamp: u64,
) -> SnapshotResult {
    let path = config.snapshot_path(timestamp);
    let seek = format_timestamp(timestamp);
    reporter.snapshot_started(index, total, &seek);

    let cmd = SnapshotCommandBuilder::new(&config.input, &path, seek.as_str())
        .with_color_space(metadata.color_space)
        .with_remove_pixfmt(config.remove_pixfmt)
        .build();
    reporter.command(&render_invocation(&cmd));

    let context = format!("snapshot {index}");
    if let Err(e) = run_to_completion(spawner, cmd, &context) {
        return failure(index, timestamp, &path, e.to_string(), reporter);
    }
    if !path.is_file() {
        return failure(
            index,
            timestamp,
            &path,
            "ffmpeg reported success but wrote no file".to_string(),
            reporter,
        );
    }

    let mut result = SnapshotResult {
        index,
        timestamp,
        path: path.clone(),
        resolution_match: false,
        success: true,
        resolution: None,
        error: None,
    };

    match prober.probe_resolution(&path) {
        Ok(actual) => {
            result.resolution = Some(actual);
            result.resolution_match = actual == metadata.resolution;
            if !result.resolution_match {
                log::debug!(
                    "{} is {actual}, source is {}",
                    path.display(),
                    metadata.resolution
                );
                reporter.resolution_mismatch(&path, metadata.resolution, actual);
            }
        }
        Err(e) => {
            log::debug!("Could not probe {}: {e}", path.display());
            reporter.resolution_unverified(&path, &e.to_string());
        }
    }

    reporter.snapshot_succeeded(&result);
    result
}

fn failure(
    index: usize,
    timestamp: u64,
    path: &Path,
    message: String,
    reporter: &Reporter,
) -> SnapshotResult {
    let error = CoreError::SnapshotFailure {
        index,
        timestamp,
        message,
    };
    log::debug!("{error}");
    let result = SnapshotResult::failed(index, timestamp, path.to_path_buf(), error.to_string());
    reporter.snapshot_failed(&result);
    result
}

/// Extracts every timestamp in order, pausing `config.pacing` between
/// consecutive extractions.
pub fn extract_snapshots<S: FfmpegSpawner, P: FfprobeExecutor>(
    config: &SnapshotConfig,
    metadata: &VideoMetadata,
    spawner: &S,
    prober: &P,
    reporter: &Reporter,
    timestamps: &[u64],
) -> Vec<SnapshotResult> {
    let total = timestamps.len();
    let mut results = Vec::with_capacity(total);

    for (i, &timestamp) in timestamps.iter().enumerate() {
        if i > 0 && !config.pacing.is_zero() {
            thread::sleep(config.pacing);
        }
        results.push(extract_snapshot(
            config, metadata, spawner, prober, reporter, i + 1, total, timestamp,
        ));
    }

    results
}
