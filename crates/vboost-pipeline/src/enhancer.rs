//! Enhancement capability.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::{PipelineError, PipelineResult};

/// Capability seam for the enhancement step.
///
/// A real model implementation swaps in here without touching the rest of
/// the pipeline.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Produce an enhanced asset at `output` from the asset at `input` and
    /// return the output path. The output must remain a decodable asset of
    /// the same container format as the input.
    async fn enhance(&self, input: &Path, output: &Path) -> PipelineResult<PathBuf>;
}

/// Placeholder enhancer: byte-identical copy plus a simulated processing
/// delay. Stands in for future model inference.
#[derive(Debug, Clone)]
pub struct PassthroughEnhancer {
    delay: Duration,
}

impl PassthroughEnhancer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PassthroughEnhancer {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

#[async_trait]
impl Enhancer for PassthroughEnhancer {
    async fn enhance(&self, input: &Path, output: &Path) -> PipelineResult<PathBuf> {
        if !input.exists() {
            return Err(PipelineError::enhance_failed(format!(
                "source not readable: {}",
                input.display()
            )));
        }

        info!(
            "Enhancing {} (placeholder, {}ms simulated delay)",
            input.display(),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;

        tokio::fs::copy(input, output).await?;
        Ok(output.to_path_buf())
    }
}
