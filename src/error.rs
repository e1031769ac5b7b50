// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the localization core.
//!
//! Missing translations are never errors; lookups always produce a string.
//! These variants cover the strict setter and configuration loading.
//! Storage failures are handled where they occur: logged and dropped by the
//! session, or propagated as `anyhow::Error` by storage backends.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    /// A language code outside the supported set, rejected by the strict setter
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

pub type LocaleResult<T> = Result<T, LocaleError>;

impl LocaleError {
    /// Short message for end users of the CLI.
    pub fn user_message(&self) -> String {
        match self {
            LocaleError::UnsupportedLanguage(code) => format!(
                "'{}' is not a supported language. Run `civicvoice languages` to list them.",
                code
            ),
            _ => self.to_string(),
        }
    }
}
