//! FFmpeg CLI wrapper and frame quality scoring.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - A runner with timeout support
//! - Asset inspection via ffprobe
//! - First-frame extraction
//! - PSNR/SSIM scoring of frame pairs on a fixed canvas

pub mod command;
pub mod error;
pub mod frame;
pub mod probe;
pub mod quality;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use frame::{extract_first_frame, extract_first_frame_with};
pub use probe::{probe_asset, AssetInfo};
pub use quality::{scale_to_canvas, score_frames};
