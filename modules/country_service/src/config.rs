//! Configuration for country service module

use serde::Deserialize;

/// Country service configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Relational store settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL (`postgres://...` or `sqlite:...`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Apply pending migrations during module init
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Log every SQL statement through sqlx
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            run_migrations: true,
            sqlx_logging: false,
        }
    }
}

fn default_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
