// ============================================================================
// vidsnap-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates the two external collaborators. Both are reached
// through traits (FfmpegSpawner, FfprobeExecutor) so that the snapshot
// workflow can be exercised against mocks.
//
// KEY COMPONENTS:
// - Traits for external tool interactions (FfmpegSpawner, FfprobeExecutor)
// - Concrete implementations using ffmpeg-sidecar and the ffprobe binary
// - Dependency checking
// - Invocation formatting for debug output

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::ffi::OsStr;
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the snapshot command builder and scale filter construction
pub mod ffmpeg_builder;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

/// Mock implementations of the external tool traits
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_builder::{SnapshotCommandBuilder, scale_filter};
pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, ffmpeg_program,
    run_to_completion,
};
pub use ffprobe_executor::{FfprobeCommandExecutor, FfprobeExecutor, ProbeOutput};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external program is available and executable.
///
/// Runs `<program> -version` with output discarded. Only a failure to start
/// matters; the exit status is ignored. `program` may be a bare name looked
/// up on `PATH` or a path to the binary.
///
/// # Returns
///
/// * `Ok(())` - If the program could be started
/// * `Err(CoreError::DependencyNotFound)` - If the program is not found
/// * `Err(CoreError::CommandStart)` - If the program exists but fails to start
pub fn check_dependency<P: AsRef<OsStr>>(program: P) -> CoreResult<()> {
    let program = program.as_ref();
    let name = program.to_string_lossy();
    let result = Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", name);
            Err(CoreError::DependencyNotFound(name.into_owned()))
        }
        Err(e) => {
            log::debug!("Failed to start dependency check command '{}': {}", name, e);
            Err(CoreError::CommandStart(name.into_owned(), e))
        }
    }
}

/// Checks ffprobe and the ffmpeg binary `SidecarSpawner` will run.
pub fn check_dependencies() -> CoreResult<()> {
    check_dependency(ffprobe_executor::FFPROBE)?;
    check_dependency(ffmpeg_program())
}

// ============================================================================
// INVOCATION FORMATTING
// ============================================================================

/// Renders a program and its arguments as a copy-pasteable shell line.
///
/// Arguments containing anything outside a conservative safe set are single
/// quoted, with embedded single quotes escaped as `'\''`.
pub fn format_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    std::iter::once(quote_arg(program))
        .chain(args.iter().map(|a| quote_arg(&a.as_ref().to_string_lossy())))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
