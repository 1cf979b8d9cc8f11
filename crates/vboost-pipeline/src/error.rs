//! Pipeline error types.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Enhancement failed: {0}")]
    EnhanceFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Media error: {0}")]
    Media(#[from] vboost_media::MediaError),

    #[error("Storage error: {0}")]
    Storage(#[from] vboost_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn enhance_failed(msg: impl Into<String>) -> Self {
        Self::EnhanceFailed(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
