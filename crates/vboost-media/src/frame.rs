//! First-frame extraction.

use image::DynamicImage;
use std::path::Path;
use tracing::debug;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Extract the first frame of a video as a decoded raster image.
///
/// FFmpeg writes frame 0 to a temporary PNG which is then decoded in memory.
/// The temporary file is removed when the function returns.
pub async fn extract_first_frame(video_path: impl AsRef<Path>) -> MediaResult<DynamicImage> {
    extract_first_frame_with(&FfmpegRunner::new(), video_path).await
}

/// Extract the first frame using a caller-configured runner (e.g. with a
/// timeout).
pub async fn extract_first_frame_with(
    runner: &FfmpegRunner,
    video_path: impl AsRef<Path>,
) -> MediaResult<DynamicImage> {
    let video_path = video_path.as_ref();

    if !video_path.exists() {
        return Err(MediaError::FileNotFound(video_path.to_path_buf()));
    }

    let temp_dir = tempfile::tempdir()?;
    let frame_path = temp_dir.path().join("frame0.png");

    debug!("Extracting first frame of {}", video_path.display());

    let cmd = FfmpegCommand::new(video_path, &frame_path)
        .single_frame()
        .log_level("error");

    runner.run(&cmd).await?;

    if !frame_path.exists() {
        return Err(MediaError::invalid_video(format!(
            "no frame decoded from {}",
            video_path.display()
        )));
    }

    let data = tokio::fs::read(&frame_path).await?;
    image::load_from_memory(&data).map_err(|e| MediaError::frame_decode(e.to_string()))
}
