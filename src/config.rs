// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration for the localization core.
//!
//! Read from a JSON file; every field has a default, so an empty object
//! (or no file at all) yields the stock behaviour.

use crate::error::{LocaleError, LocaleResult};
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "CIVICVOICE_CONFIG";

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "civicvoice.json";

/// Storage key the active language is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when nothing is persisted
    pub default_language: Lang,

    /// Key under which the language preference is stored
    pub storage_key: String,

    /// Directory for file-backed preferences
    pub storage_dir: Option<PathBuf>,

    /// Reject unsupported codes at the setter instead of storing them
    pub strict_language_codes: bool,

    /// Remove the Amharic override when switching to another language
    pub clear_stale_override: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Lang::En,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            strict_language_codes: false,
            clear_stale_override: false,
        }
    }
}

impl Config {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> LocaleResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| LocaleError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|err| LocaleError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Locate and load the configuration.
    ///
    /// Order: `explicit` path, then `$CIVICVOICE_CONFIG`, then
    /// `civicvoice.json` in the working directory, then defaults. A named
    /// file that is missing or malformed is an error; the working-directory
    /// file is only read when present.
    pub fn resolve(explicit: Option<&Path>) -> LocaleResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match env::var(CONFIG_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                return Self::load(Path::new(value.trim()));
            }
            _ => {}
        }
        let local = Path::new(CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_language, Lang::En);
        assert_eq!(config.storage_key, "language");
        assert!(!config.strict_language_codes);
        assert!(!config.clear_stale_override);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_language": "am"}"#).unwrap();
        assert_eq!(config.default_language, Lang::Am);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_unknown_default_language_is_rejected() {
        let parsed: Result<Config, _> = serde_json::from_str(r#"{"default_language": "fr"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("civicvoice.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, LocaleError::Config { .. }));
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"storage_key": "civicvoice.lang", "strict_language_codes": true}"#)
            .unwrap();
        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.storage_key, "civicvoice.lang");
        assert!(config.strict_language_codes);
    }

    // Only test that touches the process environment and working directory.
    #[test]
    fn test_resolve_env_then_working_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let from_env = dir.path().join("env.json");
        fs::write(&from_env, r#"{"default_language": "ti"}"#).unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"default_language": "so"}"#).unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(dir.path()).unwrap();

        env::set_var(CONFIG_ENV, &from_env);
        let env_config = Config::resolve(None);
        env::remove_var(CONFIG_ENV);
        let local_config = Config::resolve(None);

        env::set_current_dir(original_dir).unwrap();
        assert_eq!(env_config.unwrap().default_language, Lang::Ti);
        assert_eq!(local_config.unwrap().default_language, Lang::So);
    }
}
