//! FFprobe integration for media analysis
//!
//! This module runs ffprobe with JSON output to extract the duration,
//! resolution and color tags of the first video stream of a file.
use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::format_command;
use crate::media::{ColorSpace, MediaProbe, Resolution};
use crate::terminal;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

pub(crate) const FFPROBE: &str = "ffprobe";

/// Trait for anything that can answer the prober's questions about a file.
///
/// The three queries are separate so callers only pay for (and only
/// trigger) the probe they actually need.
pub trait FfprobeExecutor {
    /// Duration and resolution of the first video stream.
    fn probe_media(&self, input_path: &Path) -> CoreResult<MediaProbe>;

    /// Color space of the first video stream; `Unknown` when untagged.
    fn probe_color_space(&self, input_path: &Path) -> CoreResult<ColorSpace>;

    /// Resolution of an image or video file.
    fn probe_resolution(&self, path: &Path) -> CoreResult<Resolution>;
}

/// Subset of `ffprobe -print_format json` output used by vidsnap.
#[derive(Debug, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    #[serde(default)]
    pub format: Option<ProbeFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeStream {
    pub codec_type: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub duration: Option<String>,
    pub color_space: Option<String>,
    pub color_primaries: Option<String>,
    pub color_transfer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeFormat {
    pub duration: Option<String>,
}

impl ProbeOutput {
    /// Parses raw ffprobe JSON.
    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            CoreError::ProbeFailure(format!("Failed to parse ffprobe output: {e}"))
        })
    }

    fn video_stream(&self) -> Option<&ProbeStream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
    }

    /// Stream duration, falling back to the container duration (Matroska
    /// streams usually carry none). The fractional part is truncated.
    pub fn duration_secs(&self, path: &Path) -> CoreResult<u64> {
        let parse = |d: Option<&String>| d.and_then(|d| d.trim().parse::<f64>().ok());
        let duration = self
            .video_stream()
            .and_then(|s| parse(s.duration.as_ref()))
            .or_else(|| self.format.as_ref().and_then(|f| parse(f.duration.as_ref())))
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| {
                CoreError::ProbeFailure(format!(
                    "Could not determine duration of {}",
                    path.display()
                ))
            })?;

        let whole = duration.trunc() as u64;
        if whole < 1 {
            return Err(CoreError::InvalidDuration(format!(
                "{} is shorter than one second ({duration:.3}s)",
                path.display()
            )));
        }
        Ok(whole)
    }

    pub fn resolution(&self, path: &Path) -> CoreResult<Resolution> {
        let stream = self.video_stream().ok_or_else(|| {
            CoreError::ProbeFailure(format!("No video stream found in {}", path.display()))
        })?;
        match (stream.width, stream.height) {
            (Some(w), Some(h)) => match (u32::try_from(w), u32::try_from(h)) {
                (Ok(width), Ok(height)) if width > 0 && height > 0 => {
                    Ok(Resolution::new(width, height))
                }
                _ => Err(invalid_dimensions(path, w, h)),
            },
            _ => Err(CoreError::ProbeFailure(format!(
                "Could not determine resolution of {}",
                path.display()
            ))),
        }
    }

    /// First recognised tag among color_space, color_primaries and
    /// color_transfer.
    #[must_use]
    pub fn color_space(&self) -> ColorSpace {
        let Some(stream) = self.video_stream() else {
            return ColorSpace::Unknown;
        };
        [
            &stream.color_space,
            &stream.color_primaries,
            &stream.color_transfer,
        ]
        .into_iter()
        .flatten()
        .find_map(|tag| ColorSpace::from_tag(tag))
        .unwrap_or(ColorSpace::Unknown)
    }
}

fn invalid_dimensions(path: &Path, width: i64, height: i64) -> CoreError {
    CoreError::ProbeFailure(format!(
        "Invalid dimensions found in {}: width={}, height={}",
        path.display(),
        width,
        height
    ))
}

/// Production prober running the `ffprobe` binary.
#[derive(Debug, Clone, Default)]
pub struct FfprobeCommandExecutor {
    debug: bool,
}

impl FfprobeCommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo every ffprobe invocation before running it.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Argument list for probing the first video stream of `path`.
    #[must_use]
    pub fn probe_args(path: &Path) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> = [
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "-select_streams",
            "v:0",
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        args.push(path.as_os_str().to_os_string());
        args
    }

    fn run(&self, path: &Path, context: &str) -> CoreResult<ProbeOutput> {
        let args = Self::probe_args(path);
        if self.debug {
            terminal::print_command(&format_command(FFPROBE, &args));
        }
        log::debug!("Running ffprobe ({context}) on: {}", path.display());

        let output = Command::new(FFPROBE)
            .args(&args)
            .output()
            .map_err(|e| command_start_error(FFPROBE, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("ffprobe failed for {context} on {}: {stderr}", path.display());
            return Err(CoreError::ProbeFailure(format!(
                "{FFPROBE} ({context}) exited with {} on '{}': {stderr}",
                output.status,
                path.display()
            )));
        }

        ProbeOutput::from_json(&output.stdout)
    }
}

impl FfprobeExecutor for FfprobeCommandExecutor {
    fn probe_media(&self, input_path: &Path) -> CoreResult<MediaProbe> {
        let probe = self.run(input_path, "media info")?;
        Ok(MediaProbe {
            duration_secs: probe.duration_secs(input_path)?,
            resolution: probe.resolution(input_path)?,
        })
    }

    fn probe_color_space(&self, input_path: &Path) -> CoreResult<ColorSpace> {
        Ok(self.run(input_path, "color metadata")?.color_space())
    }

    fn probe_resolution(&self, path: &Path) -> CoreResult<Resolution> {
        self.run(path, "resolution")?.resolution(path)
    }
}
