//! Utility functions for formatting and file checks.
//!
//! General-purpose helpers used throughout the vidsnap-core library: time
//! formatting for ffmpeg seeks and summaries, and input file validation.

use std::fs::File;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Formats whole seconds as an ffmpeg seek position, `HH:MM:SS.mmm`
/// (e.g., 3725 -> "01:02:05.000").
#[must_use]
pub fn format_timestamp(seconds: u64) -> String {
    format_timestamp_millis(seconds.saturating_mul(1000))
}

/// Formats milliseconds as `HH:MM:SS.mmm`.
#[must_use]
pub fn format_timestamp_millis(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let ms = millis % 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}.{ms:03}")
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Verifies that `path` names a regular file that can be opened for reading.
pub fn check_input_file(path: &Path) -> CoreResult<()> {
    if path.as_os_str().is_empty() {
        return Err(CoreError::InvalidInput("No input file given".to_string()));
    }
    let metadata = std::fs::metadata(path).map_err(|e| {
        CoreError::InvalidInput(format!("Cannot access input file '{}': {}", path.display(), e))
    })?;
    if !metadata.is_file() {
        return Err(CoreError::InvalidInput(format!(
            "Input path '{}' is not a file",
            path.display()
        )));
    }
    File::open(path).map_err(|e| {
        CoreError::InvalidInput(format!("Cannot read input file '{}': {}", path.display(), e))
    })?;
    Ok(())
}
