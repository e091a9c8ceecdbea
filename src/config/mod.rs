pub mod app_conf;
pub mod pushover_conf;
pub mod supabase_conf;

pub use app_conf::AppConfig;
pub use pushover_conf::PushoverConfig;
pub use supabase_conf::SupabaseConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
