//! Implementation of the snapshot run.
//!
//! Turns parsed flags into a `SnapshotConfig`, checks preconditions in a
//! fixed order (configuration, input file, external tools) and hands over to
//! `vidsnap_core::take_snapshots`.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::logging::get_timestamp;

use vidsnap_core::config::validate_snapshot_count;
use vidsnap_core::{
    FfprobeCommandExecutor, SidecarSpawner, SnapshotConfig, SnapshotConfigBuilder, SnapshotReport,
    check_dependencies, check_input_file, take_snapshots,
};

use log::debug;
use std::time::Duration;

/// Builds the run configuration from CLI flags.
pub fn build_config(cli: &Cli) -> CliResult<SnapshotConfig> {
    let input = cli.input.clone().cli_context("No input file given")?;
    let count = validate_snapshot_count(cli.num_screenshots)?;

    SnapshotConfigBuilder::new()
        .input(input)
        .count(count)
        .force_format(cli.force_format.map(Into::into))
        .remove_pixfmt(cli.remove_pixfmt)
        .output_dir(cli.directory.clone())
        .prefix(cli.prefix.clone())
        .silent(cli.silent)
        .debug(cli.debug)
        .pacing(Duration::from_millis(cli.pacing_ms))
        .seed(cli.seed)
        .build()
}

/// Runs a snapshot job with the real ffprobe and ffmpeg.
pub fn run_snapshot(cli: &Cli) -> CliResult<SnapshotReport> {
    debug!("vidsnap run started at {}", get_timestamp());

    let config = build_config(cli)?;
    check_input_file(&config.input)?;
    check_dependencies()?;

    let prober = FfprobeCommandExecutor::new().with_debug(config.debug);
    let report = take_snapshots(&config, &SidecarSpawner, &prober)?;

    debug!(
        "vidsnap run finished at {}: {} of {} snapshot(s) produced",
        get_timestamp(),
        report.produced_paths().len(),
        report.results.len()
    );
    Ok(report)
}
