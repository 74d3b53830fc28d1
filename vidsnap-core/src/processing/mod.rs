//! Core snapshot workflow.
//!
//! `take_snapshots` runs a whole job: validation, probing, color
//! resolution, timestamp sampling and the extraction loop. It is generic
//! over the ffmpeg spawner and the ffprobe executor so the workflow can be
//! driven by mocks.

/// Color-space selection (forced or detected)
pub mod color;

/// Random timestamp sampling inside the 5%-35% window
pub mod sampling;

/// Per-timestamp ffmpeg extraction
pub mod snapshot;

pub use color::resolve_color_space;
pub use sampling::{SamplingWindow, sample_timestamps, sample_timestamps_with_rng};
pub use snapshot::{extract_snapshot, extract_snapshots};

use std::time::Instant;

use crate::config::{SnapshotConfig, prepare_output_dir};
use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, FfprobeExecutor};
use crate::media::VideoMetadata;
use crate::reporting::{Reporter, SnapshotReport};
use crate::utils::check_input_file;

/// Takes `config.count` snapshots of `config.input`.
///
/// Fails before any extraction when the configuration, input, output
/// directory, probe or sampling window is unusable. Once extraction starts
/// it always returns a report; individual failures are inside it.
pub fn take_snapshots<S: FfmpegSpawner, P: FfprobeExecutor>(
    config: &SnapshotConfig,
    spawner: &S,
    prober: &P,
) -> CoreResult<SnapshotReport> {
    let started = Instant::now();
    let reporter = Reporter::from_config(config);

    config.validate()?;
    check_input_file(&config.input)?;
    prepare_output_dir(&config.output_dir)?;

    let probe = prober.probe_media(&config.input)?;
    let color_space = resolve_color_space(config, prober, &config.input)?;
    let metadata = VideoMetadata::new(probe, color_space);
    log::debug!(
        "{}: {}s, {}, {}",
        config.input.display(),
        metadata.duration_secs,
        metadata.resolution,
        metadata.color_space
    );
    reporter.video_info(&config.input, &metadata);

    let timestamps = sample_timestamps(metadata.duration_secs, config.count, config.seed)?;
    reporter.timestamps(&timestamps);

    let results = extract_snapshots(config, &metadata, spawner, prober, &reporter, &timestamps);
    let report = SnapshotReport { metadata, results };

    log::debug!(
        "Finished: {} produced, {} failed",
        report.produced_paths().len(),
        report.failed_count()
    );
    reporter.summary(&report, started.elapsed());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::{MockFfmpegSpawner, MockFfprobeExecutor};
    use crate::media::{ColorSpace, MediaProbe, Resolution};
    use std::path::Path;
    use std::time::Duration;

    fn job(dir: &Path) -> SnapshotConfig {
        let input = dir.join("movie.mkv");
        std::fs::write(&input, b"not really a video").unwrap();
        SnapshotConfig {
            input,
            output_dir: dir.join("shots"),
            silent: true,
            pacing: Duration::ZERO,
            seed: Some(7),
            ..Default::default()
        }
    }

    fn prober_for(config: &SnapshotConfig, duration_secs: u64) -> MockFfprobeExecutor {
        let prober = MockFfprobeExecutor::new();
        prober.expect_media(
            &config.input,
            MediaProbe {
                duration_secs,
                resolution: Resolution::new(1920, 1080),
            },
        );
        prober
    }

    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(dir.path());
        let prober = prober_for(&config, 1200);
        prober.expect_color_space(&config.input, ColorSpace::Bt709);
        let spawner = MockFfmpegSpawner::new();

        let report = take_snapshots(&config, &spawner, &prober).unwrap();

        assert_eq!(report.results.len(), 3);
        assert!(report.results.iter().all(|r| r.success && r.resolution_match));
        assert_eq!(report.metadata.color_space, ColorSpace::Bt709);
        for result in &report.results {
            assert!((150..=509).contains(&result.timestamp));
            assert!(result.path.is_file());
            assert!(result.path.starts_with(dir.path().join("shots")));
        }
        let calls = spawner.get_received_calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|args| args.iter().any(|a| a.contains("bt709"))));
    }

    #[test]
    fn test_forced_format_never_probes_color() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = job(dir.path());
        config.force_format = Some(ColorSpace::Bt2020);
        let prober = prober_for(&config, 1200);
        let spawner = MockFfmpegSpawner::new();

        let report = take_snapshots(&config, &spawner, &prober).unwrap();

        assert_eq!(prober.color_probe_calls(), 0);
        assert_eq!(report.metadata.color_space, ColorSpace::Bt2020);
        assert!(
            spawner.get_received_calls()[0]
                .iter()
                .any(|a| a.contains("in_color_matrix=bt2020"))
        );
    }

    #[test]
    fn test_failed_snapshot_excluded_from_silent_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(dir.path());
        let prober = prober_for(&config, 1200);
        let spawner = MockFfmpegSpawner::new();
        // Every output path contains the prefix; only the first call fails.
        spawner.add_exit_error_expectation("snapshot_", 1);

        let report = take_snapshots(&config, &spawner, &prober).unwrap();

        assert_eq!(report.failed_count(), 1);
        assert!(!report.results[0].success);
        let silent = report.silent_output();
        assert_eq!(silent.split(' ').count(), 2);
        assert!(!silent.contains(&report.results[0].path.display().to_string()));
    }

    #[test]
    fn test_zero_count_fails_before_probing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = job(dir.path());
        config.count = 0;
        let prober = prober_for(&config, 1200);
        let spawner = MockFfmpegSpawner::new();

        let err = take_snapshots(&config, &spawner, &prober).unwrap_err();

        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(prober.media_probe_calls(), 0);
        assert!(spawner.get_received_calls().is_empty());
    }

    #[test]
    fn test_short_video_fails_before_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let config = job(dir.path());
        let prober = prober_for(&config, 10);
        let spawner = MockFfmpegSpawner::new();

        let err = take_snapshots(&config, &spawner, &prober).unwrap_err();

        assert!(matches!(err, CoreError::InvalidDuration(_)));
        assert!(spawner.get_received_calls().is_empty());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = SnapshotConfig {
            input: dir.path().join("nope.mkv"),
            output_dir: dir.path().to_path_buf(),
            silent: true,
            ..Default::default()
        };
        let prober = MockFfprobeExecutor::new();

        let err = take_snapshots(&config, &MockFfmpegSpawner::new(), &prober).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert_eq!(prober.media_probe_calls(), 0);
    }
}
