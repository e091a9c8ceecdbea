use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info, warn};

use crate::config::ConfigError;

pub const DEFAULT_PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushoverConfig {
    pub token: String,
    pub user: String,
    pub api_url: String,
}

impl PushoverConfig {
    /// Load Pushover configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PUSHOVER_TOKEN: application token
    /// - PUSHOVER_USER: user/group key to deliver to
    /// - PUSHOVER_API_URL: optional endpoint override (defaults to the
    ///   official messages API)
    ///
    /// Returns `Ok(None)` when the token or user key is absent: the
    /// notification side effect is disabled rather than failing startup.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        info!("Loading Pushover configuration from environment variables");

        let token = match env::var("PUSHOVER_TOKEN") {
            Ok(t) => t,
            Err(_) => {
                warn!("PUSHOVER_TOKEN not set, notifications are disabled");
                return Ok(None);
            }
        };

        let user = match env::var("PUSHOVER_USER") {
            Ok(u) => u,
            Err(_) => {
                warn!("PUSHOVER_USER not set, notifications are disabled");
                return Ok(None);
            }
        };

        let api_url = env::var("PUSHOVER_API_URL")
            .unwrap_or_else(|_| DEFAULT_PUSHOVER_API_URL.to_string());
        debug!("Pushover API URL: {}", api_url);

        let config = Self {
            token,
            user,
            api_url,
        };
        config.validate()?;

        info!("Pushover configuration loaded successfully");
        Ok(Some(config))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.is_empty() {
            return Err(ConfigError::ValidationError(
                "Pushover token cannot be empty".to_string(),
            ));
        }

        if self.user.is_empty() {
            return Err(ConfigError::ValidationError(
                "Pushover user key cannot be empty".to_string(),
            ));
        }

        if self.api_url.is_empty() {
            return Err(ConfigError::InvalidValue(
                "Pushover API URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PushoverConfig {
    fn default() -> Self {
        warn!("Using default Pushover configuration - this should only be used for testing");
        Self {
            token: "test-token".to_string(),
            user: "test-user".to_string(),
            api_url: DEFAULT_PUSHOVER_API_URL.to_string(),
        }
    }
}
