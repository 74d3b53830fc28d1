use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Frame dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Color matrix used to convert decoded YUV frames to RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Bt709,
    Bt601,
    Bt2020,
    Unknown,
}

impl ColorSpace {
    /// Maps an ffprobe color tag (`color_space`, `color_primaries` or
    /// `color_transfer`) to a known color space.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        match tag.as_str() {
            "bt709" => Some(ColorSpace::Bt709),
            "smpte170m" | "bt470bg" => Some(ColorSpace::Bt601),
            t if t.starts_with("bt2020") => Some(ColorSpace::Bt2020),
            _ => None,
        }
    }

    /// Value passed to the scale filter's color matrix options.
    ///
    /// `Unknown` is handed to ffmpeg as `auto` so the decoder falls back to
    /// its own detection instead of rejecting the filter.
    #[must_use]
    pub fn ffmpeg_matrix(&self) -> &'static str {
        match self {
            ColorSpace::Bt709 => "bt709",
            ColorSpace::Bt601 => "bt601",
            ColorSpace::Bt2020 => "bt2020",
            ColorSpace::Unknown => "auto",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Bt709 => write!(f, "bt709"),
            ColorSpace::Bt601 => write!(f, "bt601"),
            ColorSpace::Bt2020 => write!(f, "bt2020"),
            ColorSpace::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = CoreError;

    /// Parses a forced color format. Only the three concrete matrices are
    /// accepted; `unknown` is a detection result, never a user choice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bt709" => Ok(ColorSpace::Bt709),
            "bt601" => Ok(ColorSpace::Bt601),
            "bt2020" => Ok(ColorSpace::Bt2020),
            other => Err(CoreError::Config(format!(
                "Unsupported color format '{other}' (expected bt709, bt601 or bt2020)"
            ))),
        }
    }
}

/// Duration and stream properties reported by the prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaProbe {
    /// Duration in whole seconds (fraction truncated)
    pub duration_secs: u64,
    pub resolution: Resolution,
}

/// Everything the extractor needs to know about the source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMetadata {
    pub duration_secs: u64,
    pub resolution: Resolution,
    pub color_space: ColorSpace,
}

impl VideoMetadata {
    #[must_use]
    pub fn new(probe: MediaProbe, color_space: ColorSpace) -> Self {
        Self {
            duration_secs: probe.duration_secs,
            resolution: probe.resolution,
            color_space,
        }
    }
}
