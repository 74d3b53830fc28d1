//! Color-space resolution.
//!
//! A forced format always wins and the prober is not consulted. Otherwise
//! the video stream's tags decide; untagged or unrecognised streams resolve
//! to `ColorSpace::Unknown`, which is not an error.

use std::path::Path;

use crate::config::SnapshotConfig;
use crate::error::CoreResult;
use crate::external::FfprobeExecutor;
use crate::media::ColorSpace;

/// Returns the color matrix to decode `input` with.
pub fn resolve_color_space<P: FfprobeExecutor>(
    config: &SnapshotConfig,
    prober: &P,
    input: &Path,
) -> CoreResult<ColorSpace> {
    if let Some(forced) = config.force_format {
        log::debug!("Using forced color format {forced}, skipping detection");
        return Ok(forced);
    }

    let detected = prober.probe_color_space(input)?;
    if detected == ColorSpace::Unknown {
        log::debug!(
            "No recognised color metadata in {}, letting ffmpeg pick the matrix",
            input.display()
        );
    } else {
        log::debug!("Detected color space {detected} for {}", input.display());
    }
    Ok(detected)
}
