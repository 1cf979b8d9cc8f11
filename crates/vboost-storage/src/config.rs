//! Store configuration.

use crate::error::{StorageError, StorageResult};

/// Environment variable carrying the connection credential string.
pub const ENV_CONNECTION: &str = "VBOOST_STORE_CONNECTION";
/// Environment variable carrying the container name.
pub const ENV_CONTAINER: &str = "VBOOST_STORE_CONTAINER";

/// Configuration for the object store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// S3 API endpoint URL
    pub endpoint_url: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Target container (bucket)
    pub container: String,
    /// Base URL public object URLs are built from (the account host)
    pub public_base_url: String,
    /// Region (usually "auto" for S3-compatible stores)
    pub region: String,
}

impl StoreConfig {
    /// Build config from a connection credential string and a container name.
    ///
    /// The credential string is a `key=value` list separated by `;`, with
    /// case-insensitive keys: `Endpoint` (required), `AccessKey` (required),
    /// `SecretKey` (required), `PublicBase` (defaults to the endpoint) and
    /// `Region` (defaults to `auto`). Unknown keys are ignored.
    pub fn from_connection_string(credential: &str, container: &str) -> StorageResult<Self> {
        if container.is_empty() {
            return Err(StorageError::config_error("container name is empty"));
        }

        let mut endpoint = None;
        let mut access_key = None;
        let mut secret_key = None;
        let mut public_base = None;
        let mut region = None;

        for part in credential.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, value) = part.split_once('=').ok_or_else(|| {
                StorageError::config_error(format!("malformed connection segment: {}", part))
            })?;
            match key.trim().to_ascii_lowercase().as_str() {
                "endpoint" => endpoint = Some(value.trim().to_string()),
                "accesskey" => access_key = Some(value.trim().to_string()),
                "secretkey" => secret_key = Some(value.trim().to_string()),
                "publicbase" => public_base = Some(value.trim().to_string()),
                "region" => region = Some(value.trim().to_string()),
                _ => {}
            }
        }

        let endpoint_url = endpoint
            .ok_or_else(|| StorageError::config_error("connection string missing Endpoint"))?;
        let access_key_id = access_key
            .ok_or_else(|| StorageError::config_error("connection string missing AccessKey"))?;
        let secret_access_key = secret_key
            .ok_or_else(|| StorageError::config_error("connection string missing SecretKey"))?;

        Ok(Self {
            public_base_url: public_base.unwrap_or_else(|| endpoint_url.clone()),
            endpoint_url,
            access_key_id,
            secret_access_key,
            container: container.to_string(),
            region: region.unwrap_or_else(|| "auto".to_string()),
        })
    }

    /// Create config from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        let credential = std::env::var(ENV_CONNECTION)
            .map_err(|_| StorageError::config_error(format!("{} not set", ENV_CONNECTION)))?;
        let container = std::env::var(ENV_CONTAINER)
            .map_err(|_| StorageError::config_error(format!("{} not set", ENV_CONTAINER)))?;
        Self::from_connection_string(&credential, &container)
    }

    /// Deterministic public URL for an object in this container.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.container,
            key
        )
    }
}
