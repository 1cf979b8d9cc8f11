//! Pipeline configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root directory for per-run work directories
    pub work_dir: PathBuf,
    /// Simulated processing delay of the placeholder enhancer
    pub enhance_delay: Duration,
    /// Timeout for FFmpeg invocations (frame extraction)
    pub ffmpeg_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("/tmp/vboost"),
            enhance_delay: Duration::from_secs(3),
            ffmpeg_timeout_secs: 60,
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("VBOOST_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
            enhance_delay: std::env::var("VBOOST_ENHANCE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.enhance_delay),
            ffmpeg_timeout_secs: std::env::var("VBOOST_FFMPEG_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.ffmpeg_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.enhance_delay, Duration::from_secs(3));
        assert_eq!(config.ffmpeg_timeout_secs, 60);
    }
}
