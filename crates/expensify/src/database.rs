//! Database selection
//!
//! Builds the `Database` the store talks to from the app config and the
//! credentials found in the environment.

use anyhow::{Context, Result};
use expense_db::{Database, DatabaseError, InMemoryDatabase, RestDatabase};
use expensify_config::{AppConfig, DatabaseBackend, DatabaseCredentials};
use std::sync::Arc;

pub fn open_database(
    config: &AppConfig,
    credentials: &DatabaseCredentials,
) -> Result<Arc<dyn Database>> {
    match config.backend {
        DatabaseBackend::Memory => {
            log::warn!("Using in-memory database, nothing will be persisted");
            Ok(Arc::new(InMemoryDatabase::new()))
        }
        DatabaseBackend::Rest => {
            let url = credentials.resolved_database_url().ok_or_else(|| {
                DatabaseError::NotConfigured(
                    "set FIREBASE_DATABASE_URL or FIREBASE_PROJECT_ID".to_string(),
                )
            })?;

            let mut builder = RestDatabase::builder()
                .database_url(url)
                .timeout(config.request_timeout());
            if let Some(token) = &credentials.auth_token {
                builder = builder.auth_token(token.clone());
            }

            let db = builder.build().context("Failed to create database client")?;
            log::info!("Using hosted database at {}", db.database_url());
            Ok(Arc::new(db))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_needs_no_credentials() {
        let config = AppConfig {
            backend: DatabaseBackend::Memory,
            ..Default::default()
        };
        assert!(open_database(&config, &DatabaseCredentials::default()).is_ok());
    }

    #[test]
    fn test_rest_backend_without_url_is_not_configured() {
        let err = open_database(&AppConfig::default(), &DatabaseCredentials::default())
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<DatabaseError>(),
            Some(DatabaseError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_rest_backend_from_project_id() {
        let credentials = DatabaseCredentials {
            project_id: Some("expensify-test".to_string()),
            ..Default::default()
        };
        assert!(open_database(&AppConfig::default(), &credentials).is_ok());
    }
}
