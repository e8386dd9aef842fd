//! Process configuration loaded via `OrthoConfig`.
//!
//! Values are layered from defaults, configuration files, `TASKDESK_*`
//! environment variables and command-line arguments. The process entry point
//! loads the settings once and hands the pieces to the adapters it builds.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised when settings are incomplete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No database URL was configured.
    #[error("missing database URL; set TASKDESK_DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Settings for the taskdesk service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKDESK")]
pub struct TaskdeskSettings {
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// `tracing` filter directive, for example `info,taskdesk=debug`.
    pub log_filter: Option<String>,
}

impl TaskdeskSettings {
    /// Returns the configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no URL was provided
    /// or the provided value is blank.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Returns the configured log filter, falling back to `info`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
