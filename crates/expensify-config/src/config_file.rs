//! Config file lookup
//!
//! Each location is tried with the profile-specific name first, so
//! `EXPENSIFY_ENV=test` picks up `.expensify.test.toml` before the shared
//! `.expensify.toml`.

use crate::environment::Profile;
use std::{env, path::PathBuf};

const CONFIG_FILE_STEM: &str = ".expensify";
const CONFIG_DIR_STEM: &str = "config";

/// Load config file content for `profile`
///
/// Searches, stopping at the first readable file:
/// 1. `.expensify.<profile>.toml`, then `.expensify.toml` in the current working directory
/// 2. the same two names in the home directory
/// 3. `<profile>.toml`, then `config.toml` in the config directory (`~/.config/expensify/` on Linux)
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file(profile: Profile) -> Option<String> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let config_dir = crate::config_dir().ok();

    for path in candidate_paths(profile, home, config_dir) {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    log::debug!("No config file found for profile {}", profile);
    None
}

/// Every location `load_config_file` tries, in order
fn candidate_paths(
    profile: Profile,
    home: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    let profile_file = format!("{}.{}.toml", CONFIG_FILE_STEM, profile);
    let shared_file = format!("{}.toml", CONFIG_FILE_STEM);

    let mut paths = vec![PathBuf::from(&profile_file), PathBuf::from(&shared_file)];
    if let Some(home) = home {
        paths.push(home.join(&profile_file));
        paths.push(home.join(&shared_file));
    }
    if let Some(dir) = config_dir {
        paths.push(dir.join(format!("{}.toml", profile)));
        paths.push(dir.join(format!("{}.toml", CONFIG_DIR_STEM)));
    }
    paths
}
