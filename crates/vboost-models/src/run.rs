//! Run identifiers and run reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::artifact::RemoteArtifact;
use crate::quality::QualityScores;

/// Unique identifier for a pipeline run.
///
/// Every run gets a fresh id so that concurrent runs cannot collide on
/// work-directory or object naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl RunId {
    /// Generate a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one pipeline run, handed back to the hosting UI.
///
/// `scores` and `artifact` are independently optional: missing scores mean
/// frame extraction or scoring failed, a missing artifact means publishing
/// failed (with the reason in `publish_error`). Neither failure aborts the
/// run once the enhanced asset exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier of this run
    pub run_id: RunId,
    /// Local path of the enhanced asset
    pub enhanced_path: PathBuf,
    /// Quality scores for frame 0 vs frame 0, if they could be computed
    pub scores: Option<QualityScores>,
    /// Published artifact, if the upload succeeded
    pub artifact: Option<RemoteArtifact>,
    /// Human-readable reason the upload was skipped from the results
    pub publish_error: Option<String>,
}

impl RunReport {
    /// Whether the enhanced asset was published.
    pub fn is_published(&self) -> bool {
        self.artifact.is_some()
    }

    /// Public URL of the published artifact, if any.
    pub fn public_url(&self) -> Option<&str> {
        self.artifact.as_ref().map(|a| a.url.as_str())
    }
}
