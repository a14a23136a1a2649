//! User settings for StudyLedger
//!
//! Settings are read from `config.json` in the configuration directory if the
//! file exists, and fall back to defaults otherwise. Nothing is ever written
//! back: session data lives only in memory.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_focus_minutes() -> u32 {
    25
}

fn default_break_minutes() -> u32 {
    5
}

/// User settings for StudyLedger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used for all money formatting
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Length of a focus interval in minutes
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,

    /// Length of a break interval in minutes
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, or fall back to defaults if the
    /// file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(paths: &LedgerPaths) -> LedgerResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| LedgerError::Config(format!("invalid config.json: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> LedgerResult<()> {
        if self.focus_minutes == 0 {
            return Err(LedgerError::Config("focus_minutes must be positive".into()));
        }
        if self.break_minutes == 0 {
            return Err(LedgerError::Config("break_minutes must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.focus_minutes, 25);
        assert_eq!(settings.break_minutes, 5);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.focus_minutes, 25);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"currency_symbol": "R$", "focus_minutes": 50}"#,
        )
        .unwrap();

        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.focus_minutes, 50);
        // Unspecified fields fall back to defaults
        assert_eq!(settings.break_minutes, 5);
    }

    #[test]
    fn test_invalid_durations_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"focus_minutes": 0}"#).unwrap();

        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        assert!(Settings::load_or_default(&paths).is_err());
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "not json").unwrap();

        let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(LedgerError::Config(_))
        ));
    }

    #[test]
    fn test_with_base_dir_does_not_touch_fs() {
        let paths = LedgerPaths::with_base_dir(PathBuf::from("/nonexistent/studyledger"));
        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }
}
