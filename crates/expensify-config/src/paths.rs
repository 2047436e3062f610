//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/expensify/`, `~/.cache/expensify/`
//! - macOS: `~/Library/Application Support/expensify/`, `~/Library/Caches/expensify/`
//! - Windows: `%APPDATA%\expensify\`, `%LOCALAPPDATA%\expensify\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "expensify";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
