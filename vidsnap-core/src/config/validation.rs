//! Validation of user-supplied configuration values
//!
//! These checks run before any probing so that a bad flag never costs an
//! ffprobe invocation.

use crate::error::{CoreError, CoreResult};

/// Validates a requested snapshot count. Accepts the raw signed value so
/// that negative input gets the same configuration error as zero.
pub fn validate_snapshot_count(raw: i64) -> CoreResult<u32> {
    if raw < 1 {
        return Err(CoreError::Config(format!(
            "Number of snapshots must be a positive integer, got {raw}"
        )));
    }
    u32::try_from(raw).map_err(|_| {
        CoreError::Config(format!("Number of snapshots is too large: {raw}"))
    })
}

/// Validates a filename prefix. It must be non-empty and must not contain a
/// path separator, since it is joined onto the output directory.
pub fn validate_prefix(prefix: &str) -> CoreResult<()> {
    if prefix.trim().is_empty() {
        return Err(CoreError::Config("Filename prefix must not be empty".to_string()));
    }
    if prefix.contains('/') || prefix.contains('\\') {
        return Err(CoreError::Config(format!(
            "Filename prefix '{prefix}' must not contain path separators"
        )));
    }
    Ok(())
}
