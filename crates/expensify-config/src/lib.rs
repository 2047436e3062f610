//! Configuration and file management for expensify
//!
//! This crate provides:
//! - Environment profile selection and `.env.*` loading
//! - Database credentials read from the environment
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Config and cache directory locations

pub mod app_config;
pub mod config_file;
pub mod environment;
pub mod paths;

pub use app_config::{AppConfig, DatabaseBackend};
pub use config_file::load_config_file;
pub use environment::{DatabaseCredentials, Profile};
pub use paths::{cache_dir, config_dir};
