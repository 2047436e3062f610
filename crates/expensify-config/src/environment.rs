//! Environment profiles and credentials
//!
//! The profile is picked from `EXPENSIFY_ENV` (default `development`).
//! Development and test profiles read their variables from `.env.development`
//! and `.env.test`; production takes the process environment as-is.

use std::fmt;

const PROFILE_VAR: &str = "EXPENSIFY_ENV";

const DATABASE_URL_VAR: &str = "FIREBASE_DATABASE_URL";
const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
const AUTH_TOKEN_VAR: &str = "FIREBASE_AUTH_TOKEN";

/// Runtime profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Development,
    Production,
    Test,
}

impl Profile {
    /// Parse a profile name, case-insensitive
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Profile::Development),
            "production" | "prod" => Some(Profile::Production),
            "test" => Some(Profile::Test),
            _ => None,
        }
    }

    /// Profile from `EXPENSIFY_ENV`, falling back to development
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_VAR) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                log::warn!("Unknown {} '{}', using development", PROFILE_VAR, value);
                Profile::Development
            }),
            Err(_) => Profile::Development,
        }
    }

    /// Dotenv file holding this profile's variables
    pub fn env_file(&self) -> Option<&'static str> {
        match self {
            Profile::Development => Some(".env.development"),
            Profile::Test => Some(".env.test"),
            Profile::Production => None,
        }
    }

    /// Load the profile's dotenv file into the process environment
    ///
    /// A missing file is not an error; variables already set win.
    pub fn load_env_file(&self) {
        let Some(file) = self.env_file() else {
            return;
        };

        match dotenvy::from_filename(file) {
            Ok(path) => log::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => log::debug!("No {} found", file),
            Err(e) => log::warn!("Failed to load {}: {}", file, e),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Development => "development",
            Profile::Production => "production",
            Profile::Test => "test",
        };
        f.write_str(name)
    }
}

/// Hosted database settings taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseCredentials {
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub auth_token: Option<String>,
}

impl DatabaseCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            database_url: get(DATABASE_URL_VAR),
            project_id: get(PROJECT_ID_VAR),
            auth_token: get(AUTH_TOKEN_VAR),
        }
    }

    /// Database root URL
    ///
    /// The explicit URL wins; otherwise the default instance of the project.
    pub fn resolved_database_url(&self) -> Option<String> {
        self.database_url.clone().or_else(|| {
            self.project_id
                .as_ref()
                .map(|project| format!("https://{}-default-rtdb.firebaseio.com", project))
        })
    }
}
