//! Object store abstraction.

use async_trait::async_trait;
use std::path::Path;

use vboost_models::RemoteArtifact;

use crate::error::StorageResult;

/// Seam between the pipeline and the concrete store backend.
///
/// The pipeline publishes through this trait so tests can substitute an
/// in-memory double for the real client.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the full byte content of a local file under `name`,
    /// overwriting any existing object with that name.
    async fn put_file(
        &self,
        path: &Path,
        name: &str,
        content_type: &str,
    ) -> StorageResult<RemoteArtifact>;
}
