// vidsnap-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use vidsnap_core::ColorSpace;
use vidsnap_core::config::{DEFAULT_PACING_MS, DEFAULT_PREFIX, DEFAULT_SNAPSHOT_COUNT};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "vidsnap",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidsnap: color-accurate video snapshots",
    long_about = "Extracts PNG snapshots at random timestamps between 5% and 35% of a video, \
                  decoding with the video's own color matrix via ffmpeg.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Video file to take snapshots from
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Number of snapshots to take
    #[arg(
        short = 'n',
        long = "num-screenshots",
        value_name = "COUNT",
        default_value_t = i64::from(DEFAULT_SNAPSHOT_COUNT),
        allow_negative_numbers = true
    )]
    pub num_screenshots: i64,

    /// Skip color detection and decode with this matrix
    #[arg(short = 'f', long = "force-format", value_enum, value_name = "FORMAT")]
    pub force_format: Option<ForceFormat>,

    /// Keep the source bit depth instead of converting to 8-bit RGB
    #[arg(short = 'r', long = "remove-pixfmt")]
    pub remove_pixfmt: bool,

    /// Directory where snapshots will be saved
    #[arg(short = 'd', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Filename prefix for snapshots (<PREFIX>_<SECONDS>.png)
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Print only the produced file paths
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Print the exact ffprobe/ffmpeg invocations
    #[arg(long)]
    pub debug: bool,

    /// Seed for reproducible timestamp sampling
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Delay between consecutive extractions, in milliseconds
    #[arg(
        long = "pacing-ms",
        value_name = "MS",
        env = "VIDSNAP_PACING_MS",
        default_value_t = DEFAULT_PACING_MS
    )]
    pub pacing_ms: u64,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

/// Color matrices accepted by `--force-format`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceFormat {
    Bt709,
    Bt601,
    Bt2020,
}

impl From<ForceFormat> for ColorSpace {
    fn from(format: ForceFormat) -> Self {
        match format {
            ForceFormat::Bt709 => ColorSpace::Bt709,
            ForceFormat::Bt601 => ColorSpace::Bt601,
            ForceFormat::Bt2020 => ColorSpace::Bt2020,
        }
    }
}
