// vidsnap-core/tests/snapshot_workflow_tests.rs

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;
use vidsnap_core::external::mocks::{MockFfmpegSpawner, MockFfprobeExecutor};
use vidsnap_core::media::MediaProbe;
use vidsnap_core::{ColorSpace, CoreError, Resolution, SnapshotConfigBuilder, take_snapshots};

// Helper to create a dummy input file with some content
fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let file_path = dir.join(filename);
    let mut file = File::create(&file_path).expect("Failed to create dummy file");
    file.write_all(b"dummy content").expect("Failed to write dummy content");
    file_path
}

fn ninety_minute_feature(prober: &MockFfprobeExecutor, input: &Path) {
    prober.expect_media(
        input,
        MediaProbe {
            duration_secs: 5400,
            resolution: Resolution::new(3840, 2160),
        },
    );
}

#[test]
fn test_take_snapshots_with_mocks() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input = create_dummy_file(input_dir.path(), "feature.mkv");

    let config = SnapshotConfigBuilder::new()
        .input(input.clone())
        .count(5)
        .output_dir(output_dir.path().to_path_buf())
        .prefix("still")
        .silent(true)
        .pacing(Duration::ZERO)
        .seed(Some(2024))
        .build()?;

    let prober = MockFfprobeExecutor::new();
    ninety_minute_feature(&prober, &input);
    prober.expect_color_space(&input, ColorSpace::Bt2020);
    let spawner = MockFfmpegSpawner::new();

    let report = take_snapshots(&config, &spawner, &prober)?;

    assert_eq!(report.results.len(), 5);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.mismatch_count(), 0);

    let paths = report.produced_paths();
    for (path, result) in paths.iter().zip(&report.results) {
        assert_eq!(
            path,
            &output_dir.path().join(format!("still_{}.png", result.timestamp))
        );
        assert!(path.is_file());
    }
    assert_eq!(
        report.silent_output(),
        paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    for args in spawner.get_received_calls() {
        assert!(args.iter().any(|a| a == "-hide_banner"));
        assert!(args.iter().any(|a| a.contains("in_color_matrix=bt2020")));
        assert!(args.iter().any(|a| *a == input.to_string_lossy()));
    }
    Ok(())
}

#[test]
fn test_decode_failure_does_not_abort_batch() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input = create_dummy_file(input_dir.path(), "feature.mkv");

    let config = SnapshotConfigBuilder::new()
        .input(input.clone())
        .count(4)
        .output_dir(output_dir.path().to_path_buf())
        .silent(true)
        .pacing(Duration::ZERO)
        .build()?;

    let prober = MockFfprobeExecutor::new();
    ninety_minute_feature(&prober, &input);
    let spawner = MockFfmpegSpawner::new();
    spawner.add_exit_error_expectation("snapshot_", 1);
    spawner.add_spawn_error_expectation("snapshot_", "decoder vanished");

    let report = take_snapshots(&config, &spawner, &prober)?;

    assert_eq!(spawner.get_received_calls().len(), 4);
    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.produced_paths().len(), 2);
    assert!(report.results[1].error.as_deref().unwrap().contains("decoder vanished"));
    Ok(())
}

#[test]
fn test_untagged_video_uses_auto_matrix() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let input = create_dummy_file(input_dir.path(), "home_video.mp4");

    let config = SnapshotConfigBuilder::new()
        .input(input.clone())
        .count(1)
        .output_dir(input_dir.path().join("out"))
        .silent(true)
        .pacing(Duration::ZERO)
        .build()?;

    let prober = MockFfprobeExecutor::new();
    ninety_minute_feature(&prober, &input);
    let spawner = MockFfmpegSpawner::new();

    let report = take_snapshots(&config, &spawner, &prober)?;

    assert_eq!(report.metadata.color_space, ColorSpace::Unknown);
    assert_eq!(prober.color_probe_calls(), 1);
    let args = &spawner.get_received_calls()[0];
    assert!(args.iter().any(|a| a.contains("in_color_matrix=auto")));
    assert!(input_dir.path().join("out").is_dir());
    Ok(())
}

#[test]
fn test_probe_failure_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = tempdir()?;
    let input = create_dummy_file(input_dir.path(), "broken.mkv");

    let config = SnapshotConfigBuilder::new()
        .input(input)
        .output_dir(input_dir.path().to_path_buf())
        .silent(true)
        .build()?;

    // No media expectation registered
    let prober = MockFfprobeExecutor::new();
    let spawner = MockFfmpegSpawner::new();

    let err = take_snapshots(&config, &spawner, &prober).unwrap_err();
    assert!(matches!(err, CoreError::ProbeFailure(_)));
    assert!(err.is_fatal());
    assert!(spawner.get_received_calls().is_empty());
    Ok(())
}
