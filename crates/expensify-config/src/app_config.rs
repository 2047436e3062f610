//! Application configuration
//!
//! Configuration loaded from the profile's .expensify.toml file.

use crate::environment::Profile;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which database client the application talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// Hosted database over the REST protocol (needs FIREBASE_DATABASE_URL)
    #[default]
    Rest,
    /// Throwaway in-process database, nothing survives the process
    Memory,
}

/// Application configuration loaded from .expensify.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Database client to use
    #[serde(default)]
    pub backend: DatabaseBackend,

    /// Per-request timeout for the hosted database
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            request_timeout_secs: default_request_timeout_secs(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Load the config file for `profile`, or use defaults
    pub fn load(profile: Profile) -> Self {
        if let Some(content) = crate::load_config_file(profile) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
