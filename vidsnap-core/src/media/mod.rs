//! Media information types
//!
//! Data structures describing the source video as reported by ffprobe.

pub mod info;

// Re-export commonly used types
pub use info::{ColorSpace, MediaProbe, Resolution, VideoMetadata};
