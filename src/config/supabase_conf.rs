use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub quotes_table: String,
    pub photo_bucket: String,
}

impl SupabaseConfig {
    /// Load Supabase configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SUPABASE_URL: project base URL (e.g., "https://xyz.supabase.co")
    /// - SUPABASE_KEY: service-role or anon API key
    /// - SUPABASE_QUOTES_TABLE: optional table name (defaults to "quotes")
    /// - SUPABASE_PHOTO_BUCKET: optional storage bucket (defaults to "quote-photos")
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Supabase configuration from environment variables");

        let url = env::var("SUPABASE_URL").map_err(|_| {
            error!("SUPABASE_URL environment variable not found");
            ConfigError::EnvVarNotFound("SUPABASE_URL".to_string())
        })?;
        debug!("Supabase URL: {}", url);

        let api_key = env::var("SUPABASE_KEY").map_err(|_| {
            error!("SUPABASE_KEY environment variable not found");
            ConfigError::EnvVarNotFound("SUPABASE_KEY".to_string())
        })?;
        debug!("Supabase API key loaded (length: {} chars)", api_key.len());

        let quotes_table = env::var("SUPABASE_QUOTES_TABLE").unwrap_or_else(|_| {
            warn!("SUPABASE_QUOTES_TABLE not set, using default: quotes");
            "quotes".to_string()
        });
        debug!("Supabase quotes table: {}", quotes_table);

        let photo_bucket = env::var("SUPABASE_PHOTO_BUCKET").unwrap_or_else(|_| {
            warn!("SUPABASE_PHOTO_BUCKET not set, using default: quote-photos");
            "quote-photos".to_string()
        });
        debug!("Supabase photo bucket: {}", photo_bucket);

        let config = Self {
            url,
            api_key,
            quotes_table,
            photo_bucket,
        };
        config.validate()?;

        info!("Supabase configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            error!("Supabase URL is empty");
            return Err(ConfigError::ValidationError(
                "Supabase URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            error!("Supabase URL has no scheme: {}", self.url);
            return Err(ConfigError::InvalidValue(
                "Supabase URL must start with http:// or https://".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            error!("Supabase API key is empty");
            return Err(ConfigError::ValidationError(
                "Supabase API key cannot be empty".to_string(),
            ));
        }

        if self.quotes_table.is_empty() {
            return Err(ConfigError::ValidationError(
                "Quotes table name cannot be empty".to_string(),
            ));
        }

        if self.photo_bucket.is_empty() {
            return Err(ConfigError::ValidationError(
                "Photo bucket name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the PostgREST endpoint, without trailing slash
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Base URL of the storage object endpoint, without trailing slash
    pub fn storage_url(&self) -> String {
        format!("{}/storage/v1/object", self.url.trim_end_matches('/'))
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        warn!("Using default Supabase configuration - this should only be used for testing");
        Self {
            url: "http://localhost:54321".to_string(),
            api_key: "test-key".to_string(),
            quotes_table: "quotes".to_string(),
            photo_bucket: "quote-photos".to_string(),
        }
    }
}
