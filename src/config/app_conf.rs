use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info, warn};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load application configuration from environment variables
    ///
    /// Expected environment variables:
    /// - APP_HOST: listen address (defaults to "127.0.0.1")
    /// - APP_PORT: listen port (defaults to 8080)
    pub fn from_env() -> Self {
        info!("Loading application configuration from environment variables");

        let host = env::var("APP_HOST").unwrap_or_else(|_| {
            warn!("APP_HOST not set, using default: 127.0.0.1");
            "127.0.0.1".to_string()
        });
        debug!("App host: {}", host);

        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid APP_PORT value '{}', using default: 8080", raw);
                8080
            }),
            Err(_) => {
                warn!("APP_PORT not set, using default: 8080");
                8080
            }
        };
        debug!("App port: {}", port);

        AppConfig { host, port }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "App host is not a valid IP address: {}",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue(
                "App port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        warn!("Using default application configuration - this should only be used for testing");
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
