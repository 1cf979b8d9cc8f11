//! Published artifact records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named object published to the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteArtifact {
    /// Object key inside the container
    pub key: String,
    /// Public URL of the object
    pub url: String,
    /// When the upload completed
    pub uploaded_at: DateTime<Utc>,
}

impl RemoteArtifact {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            uploaded_at: Utc::now(),
        }
    }
}
