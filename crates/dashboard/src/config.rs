//! Server configuration read from the environment at startup.

use std::{env, path::PathBuf};

use seed_data::config::DatabaseConfig;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub port: u16,
    /// JSON dataset for `/seed`; the built-in one is used when unset.
    pub fixtures_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let fixtures_path = lookup("SEED_FIXTURES_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            database: DatabaseConfig::from_lookup(&lookup),
            port,
            fixtures_path,
        }
    }
}
