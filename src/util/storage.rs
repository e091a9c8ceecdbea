use crate::config::SupabaseConfig;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// Object uploads against the Supabase storage REST API.
///
/// Objects land in the configured bucket under the caller-supplied path and
/// are addressable through the bucket's public URL prefix.
#[derive(Debug, Clone)]
pub struct SupabaseStorageService {
    client: Client,
    pub config: SupabaseConfig,
}

impl SupabaseStorageService {
    pub fn new(client: Client, config: SupabaseConfig) -> Self {
        Self { client, config }
    }

    /// Upload an object, overwriting any previous object at the same path.
    #[instrument(skip(self, data), fields(object_path = %object_path, size = data.len()))]
    pub async fn upload_object(
        &self,
        object_path: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        info!(
            "Uploading object '{}' to bucket '{}'",
            object_path, self.config.photo_bucket
        );
        debug!("Object size: {} bytes", data.len());

        let url = format!(
            "{}/{}/{}",
            self.config.storage_url(),
            self.config.photo_bucket,
            object_path
        );

        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(data)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach storage backend: {}", e);
                StorageError::ConnectionError(format!("Upload request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Upload of '{}' rejected with status {}: {}", object_path, status, body);
            return Err(StorageError::OperationError(format!(
                "Upload failed with status {}: {}",
                status, body
            )));
        }

        info!("Successfully uploaded object '{}'", object_path);
        Ok(())
    }

    /// Public download URL for an object in the photo bucket. The bucket must
    /// be configured as public on the backend for the link to resolve.
    pub fn public_url(&self, object_path: &str) -> String {
        format!(
            "{}/public/{}/{}",
            self.config.storage_url(),
            self.config.photo_bucket,
            object_path
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),
}
