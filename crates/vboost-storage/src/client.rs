//! Blob client implementation.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use vboost_models::RemoteArtifact;

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};
use crate::traits::ObjectStore;

/// Client for an S3-compatible object store.
#[derive(Clone)]
pub struct BlobClient {
    client: Client,
    config: StoreConfig,
}

impl BlobClient {
    /// Create a new client from configuration.
    pub fn new(config: StoreConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "vboost",
        );

        let sdk_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint_url)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(sdk_config),
            config,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    /// Container this client publishes into.
    pub fn container(&self) -> &str {
        &self.config.container
    }

    /// Upload a local file, overwriting any object with the same name.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        name: &str,
        content_type: &str,
    ) -> StorageResult<RemoteArtifact> {
        let path = path.as_ref();
        debug!("Uploading {} to {}", path.display(), name);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        self.put_object(body, name, content_type).await?;

        info!("Uploaded {} to {}", path.display(), name);
        Ok(RemoteArtifact::new(name, self.config.public_url(name)))
    }

    /// Upload raw bytes, overwriting any object with the same name.
    pub async fn upload_bytes(
        &self,
        data: Vec<u8>,
        name: &str,
        content_type: &str,
    ) -> StorageResult<RemoteArtifact> {
        debug!("Uploading {} bytes to {}", data.len(), name);

        self.put_object(ByteStream::from(data), name, content_type)
            .await?;

        Ok(RemoteArtifact::new(name, self.config.public_url(name)))
    }

    async fn put_object(
        &self,
        body: ByteStream,
        name: &str,
        content_type: &str,
    ) -> StorageResult<()> {
        self.client
            .put_object()
            .bucket(&self.config.container)
            .key(name)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;
        Ok(())
    }

    /// Check connectivity to the store by performing a head bucket operation.
    pub async fn check_connectivity(&self) -> StorageResult<()> {
        self.client
            .head_bucket()
            .bucket(&self.config.container)
            .send()
            .await
            .map_err(|e| StorageError::AwsSdk(format!("connectivity check failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for BlobClient {
    async fn put_file(
        &self,
        path: &Path,
        name: &str,
        content_type: &str,
    ) -> StorageResult<RemoteArtifact> {
        self.upload_file(path, name, content_type).await
    }
}

/// Guess the MIME type for an asset path from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("clip.MOV")), "video/quicktime");
        assert_eq!(
            content_type_for(Path::new("clip")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_client_exposes_container() {
        let config = StoreConfig::from_connection_string(
            "Endpoint=https://acct.example.com;AccessKey=a;SecretKey=s",
            "videos",
        )
        .unwrap();
        let client = BlobClient::new(config);
        assert_eq!(client.container(), "videos");
    }
}
