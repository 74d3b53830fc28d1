//! FFmpeg command builder for snapshot extraction
//!
//! Every decode invocation is an explicit argument list; paths are passed
//! as single arguments and are never interpolated into a shell string.

use crate::config::FIXED_PIXEL_FORMAT;
use crate::media::ColorSpace;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};

/// Scale filter that converts to RGB with the given color matrix, using
/// full-precision chroma handling.
#[must_use]
pub fn scale_filter(color_space: ColorSpace) -> String {
    let matrix = color_space.ffmpeg_matrix();
    format!(
        "scale=in_color_matrix={matrix}:out_color_matrix={matrix}:flags=accurate_rnd+full_chroma_int+full_chroma_inp"
    )
}

/// Builder for a one-frame PNG extraction command.
#[derive(Debug, Clone)]
pub struct SnapshotCommandBuilder {
    input: PathBuf,
    output: PathBuf,
    seek: String,
    color_space: ColorSpace,
    pixel_format: Option<&'static str>,
}

impl SnapshotCommandBuilder {
    /// Creates a builder seeking to `seek` (an `HH:MM:SS.mmm` string).
    #[must_use]
    pub fn new(input: &Path, output: &Path, seek: impl Into<String>) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            seek: seek.into(),
            color_space: ColorSpace::Unknown,
            pixel_format: Some(FIXED_PIXEL_FORMAT),
        }
    }

    #[must_use]
    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    /// Drops the fixed 8-bit pixel format so ffmpeg keeps the source depth.
    #[must_use]
    pub fn with_remove_pixfmt(mut self, remove: bool) -> Self {
        self.pixel_format = if remove { None } else { Some(FIXED_PIXEL_FORMAT) };
        self
    }

    /// Arguments after the binary name, in order.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-hide_banner".to_string(),
            "-ss".to_string(),
            self.seek.clone(),
            "-i".to_string(),
            self.input.to_string_lossy().into_owned(),
            "-vf".to_string(),
            scale_filter(self.color_space),
        ];
        if let Some(pix_fmt) = self.pixel_format {
            args.push("-pix_fmt".to_string());
            args.push(pix_fmt.to_string());
        }
        args.extend([
            "-frames:v".to_string(),
            "1".to_string(),
            "-y".to_string(),
            self.output.to_string_lossy().into_owned(),
        ]);
        args
    }

    /// Builds the ffmpeg-sidecar command.
    #[must_use]
    pub fn build(&self) -> FfmpegCommand {
        let mut cmd = FfmpegCommand::new();
        cmd.args(self.args());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_filter_uses_matrix() {
        assert_eq!(
            scale_filter(ColorSpace::Bt709),
            "scale=in_color_matrix=bt709:out_color_matrix=bt709:flags=accurate_rnd+full_chroma_int+full_chroma_inp"
        );
        assert!(scale_filter(ColorSpace::Unknown).contains("in_color_matrix=auto"));
    }

    #[test]
    fn test_args_with_pixel_format() {
        let args = SnapshotCommandBuilder::new(
            Path::new("/videos/my movie.mkv"),
            Path::new("/out/snapshot_150.png"),
            "00:02:30.000",
        )
        .with_color_space(ColorSpace::Bt601)
        .args();

        assert_eq!(
            &args[..5],
            ["-hide_banner", "-ss", "00:02:30.000", "-i", "/videos/my movie.mkv"]
        );
        let pix = args.iter().position(|a| a == "-pix_fmt").unwrap();
        assert_eq!(args[pix + 1], "rgb24");
        let frames = args.iter().position(|a| a == "-frames:v").unwrap();
        assert_eq!(args[frames + 1], "1");
        assert_eq!(args.last().unwrap(), "/out/snapshot_150.png");
        assert!(args.iter().any(|a| a.contains("in_color_matrix=bt601")));
    }

    #[test]
    fn test_remove_pixfmt_omits_conversion() {
        let args = SnapshotCommandBuilder::new(
            Path::new("in.mkv"),
            Path::new("out.png"),
            "00:00:10.000",
        )
        .with_remove_pixfmt(true)
        .args();
        assert!(!args.iter().any(|a| a == "-pix_fmt"));
        assert!(!args.iter().any(|a| a == "rgb24"));
    }
}
