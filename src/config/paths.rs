//! Path management for StudyLedger
//!
//! Provides platform-appropriate path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `STUDYLEDGER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/studyledger` or `~/.config/studyledger`
//! 3. Windows: `%APPDATA%\studyledger`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::LedgerError;

/// Manages all paths used by StudyLedger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all StudyLedger configuration
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("STUDYLEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/studyledger/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))?;

    Ok(base_dirs.config_dir().join("studyledger"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir() {
        let paths = LedgerPaths::with_base_dir(PathBuf::from("/tmp/studyledger-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/studyledger-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/studyledger-test/config.json")
        );
    }
}
