//! Shared configuration for the treadquote workspace.
//!
//! Holds the [`AppConfig`] loaded from environment variables and the
//! [`ConfigError`] taxonomy. Everything else (store client, engine) takes
//! its settings from here rather than reading the environment directly.

mod app_config;
mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

/// Errors raised while loading or validating application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable was set but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
