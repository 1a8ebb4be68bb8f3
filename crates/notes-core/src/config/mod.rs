//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files layered with `NOTES__*` environment variables. Each
//! sub-module represents a logical configuration section, and every field
//! has a default so an empty configuration is valid.

pub mod admin;
pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::admin::AdminBootstrapConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::session::{MAX_TTL_HOURS, SessionConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + environment vars).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Relational store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session issuance and cookie settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Credential policy settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Optional bootstrap administrator.
    #[serde(default)]
    pub admin: AdminBootstrapConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `{dir}/default.toml` with an optional `{dir}/{env}.toml`
    /// overlay and environment variables prefixed with `NOTES__`, using
    /// `__` as the section separator (`NOTES__SESSION__TTL_HOURS=24`).
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        debug!(dir, env, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("NOTES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make the server unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.ttl_hours == 0 {
            return Err(AppError::configuration(
                "session.ttl_hours must be greater than zero",
            ));
        }
        if self.session.ttl_hours > MAX_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "session.ttl_hours must be at most {MAX_TTL_HOURS}"
            )));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(AppError::configuration("session.cookie_name must not be empty"));
        }
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::configuration(
                "database.max_connections must be greater than zero",
            ));
        }
        Ok(())
    }
}
