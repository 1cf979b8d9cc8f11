//! Run orchestration.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use vboost_media::{extract_first_frame_with, score_frames, FfmpegRunner};
use vboost_models::{QualityScores, RunId, RunReport};
use vboost_storage::{content_type_for, ObjectStore};

use crate::config::PipelineConfig;
use crate::enhancer::{Enhancer, PassthroughEnhancer};
use crate::error::PipelineResult;

/// The demo pipeline: transform, score, publish.
///
/// One call to [`Pipeline::process`] is one linear run. Runs are isolated in
/// per-run work directories keyed by a fresh [`RunId`], so concurrent callers
/// never collide on output naming.
pub struct Pipeline {
    config: PipelineConfig,
    enhancer: Arc<dyn Enhancer>,
    store: Arc<dyn ObjectStore>,
}

impl Pipeline {
    /// Create a pipeline running the placeholder passthrough enhancer with
    /// the configured simulated delay.
    pub fn new(config: PipelineConfig, store: Arc<dyn ObjectStore>) -> Self {
        let enhancer: Arc<dyn Enhancer> = Arc::new(PassthroughEnhancer::new(config.enhance_delay));
        Self {
            config,
            enhancer,
            store,
        }
    }

    /// Swap in a different enhancement implementation.
    pub fn with_enhancer(mut self, enhancer: Arc<dyn Enhancer>) -> Self {
        self.enhancer = enhancer;
        self
    }

    /// Run the full pipeline on one uploaded asset.
    ///
    /// A failed transform aborts the run. Missing scores or a failed upload
    /// do not: the report carries whatever completed, with the upload
    /// failure reason preserved for display.
    pub async fn process(&self, input: &Path) -> PipelineResult<RunReport> {
        let run_id = RunId::new();
        info!(run_id = %run_id, input = %input.display(), "Starting enhancement run");

        let work_dir = self.config.work_dir.join(run_id.as_str());
        tokio::fs::create_dir_all(&work_dir).await?;

        // Transform: same container extension as the input
        let ext = input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp4")
            .to_string();
        let output = work_dir.join(format!("enhanced.{}", ext));
        let enhanced_path = self.enhancer.enhance(input, &output).await?;
        info!(run_id = %run_id, "Enhancement step complete");

        // Quality: frame 0 vs frame 0
        let scores = self.score_first_frames(input, &enhanced_path).await;
        if scores.is_none() {
            warn!(run_id = %run_id, "Quality scores unavailable for this run");
        }

        // Publish: fail-soft, the run result stands either way
        let object_name = format!("{}.{}", run_id, ext);
        let (artifact, publish_error) = match self
            .store
            .put_file(
                &enhanced_path,
                &object_name,
                content_type_for(&enhanced_path),
            )
            .await
        {
            Ok(artifact) => {
                info!(run_id = %run_id, url = %artifact.url, "Published enhanced asset");
                (Some(artifact), None)
            }
            Err(e) => {
                warn!(run_id = %run_id, error = %e, "Publish failed, keeping local results");
                (None, Some(format!("Upload failed: {}", e)))
            }
        };

        Ok(RunReport {
            run_id,
            enhanced_path,
            scores,
            artifact,
            publish_error,
        })
    }

    /// Remove the work directory of a completed run.
    ///
    /// The enhanced asset lives in the run's work directory and is referenced
    /// by the run report, so cleanup is left to the host once it is done with
    /// the preview.
    pub async fn cleanup(&self, run_id: &RunId) -> PipelineResult<()> {
        let work_dir = self.config.work_dir.join(run_id.as_str());
        if work_dir.exists() {
            tokio::fs::remove_dir_all(&work_dir).await?;
        }
        Ok(())
    }

    async fn score_first_frames(
        &self,
        original: &Path,
        enhanced: &Path,
    ) -> Option<QualityScores> {
        let runner = FfmpegRunner::new().with_timeout(self.config.ffmpeg_timeout_secs);

        let frame_a = match extract_first_frame_with(&runner, original).await {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "Frame extraction failed for original asset");
                return None;
            }
        };
        let frame_b = match extract_first_frame_with(&runner, enhanced).await {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "Frame extraction failed for enhanced asset");
                return None;
            }
        };

        score_frames(&frame_a, &frame_b)
    }
}
