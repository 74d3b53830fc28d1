//! Output directory preparation
//!
//! Snapshots are written straight into the configured directory, so it has
//! to exist and accept new files before the first ffmpeg run.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Creates `dir` if needed and verifies that files can be created in it.
pub fn prepare_output_dir(dir: &Path) -> CoreResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        CoreError::Config(format!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    if !dir.is_dir() {
        return Err(CoreError::Config(format!(
            "Output path '{}' is not a directory",
            dir.display()
        )));
    }

    // Permission bits are not reliable across platforms; try a real write.
    let probe = dir.join(format!(".vidsnap-write-check-{}", std::process::id()));
    match fs::File::create(&probe) {
        Ok(_) => {
            if let Err(e) = fs::remove_file(&probe) {
                log::warn!("Could not remove write check file {}: {}", probe.display(), e);
            }
            log::debug!("Output directory is writable: {}", dir.display());
            Ok(())
        }
        Err(e) => Err(CoreError::Config(format!(
            "Output directory '{}' is not writable: {}",
            dir.display(),
            e
        ))),
    }
}
