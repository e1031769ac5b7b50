// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session language preference.
//!
//! [`LanguageSession`] owns the active language for one session and the
//! storage handle it persists to. It is constructed per session and passed
//! to whatever composes the UI; there is no global state. The session knows
//! nothing about rendering; see `host` for the composition that applies the
//! presentation policy after each change.

use crate::config::Config;
use crate::error::{LocaleError, LocaleResult};
use crate::i18n::{self, Lang, LanguageTag};
use crate::storage::PreferenceStorage;

pub struct LanguageSession<S: PreferenceStorage> {
    storage: S,
    storage_key: String,
    active: LanguageTag,
}

impl<S: PreferenceStorage> LanguageSession<S> {
    /// Start a session from persisted state.
    ///
    /// The stored value is taken as-is. When nothing (or a blank value) is
    /// stored, or storage cannot be read, the configured default language is
    /// used.
    pub fn open(storage: S, config: &Config) -> Self {
        let storage_key = config.storage_key.clone();
        let active = match storage.get(&storage_key) {
            Ok(Some(code)) if code.trim().is_empty() => {
                LanguageTag::Known(config.default_language)
            }
            Ok(Some(code)) => {
                let tag = LanguageTag::from(code);
                if tag.lang().is_none() {
                    log::warn!(
                        "persisted language {:?} is not supported; lookups will use English",
                        tag.as_str()
                    );
                }
                tag
            }
            Ok(None) => LanguageTag::Known(config.default_language),
            Err(err) => {
                log::warn!("could not read language preference: {:#}", err);
                LanguageTag::Known(config.default_language)
            }
        };
        log::debug!("language session opened with {}", active);

        Self {
            storage,
            storage_key,
            active,
        }
    }

    pub fn active(&self) -> &LanguageTag {
        &self.active
    }

    /// Switch the active language and persist it.
    ///
    /// The code is not validated. A failed write is logged and dropped; the
    /// new language stays in effect for this session either way.
    pub fn set_language(&mut self, code: impl Into<LanguageTag>) {
        let tag = code.into();
        if let Err(err) = self.storage.set(&self.storage_key, tag.as_str()) {
            log::warn!(
                "could not persist language {:?}: {:#}",
                tag.as_str(),
                err
            );
        }
        log::debug!("active language {} -> {}", self.active, tag);
        self.active = tag;
    }

    /// Strict variant of [`set_language`](Self::set_language): unsupported
    /// codes are rejected and the session is left unchanged.
    pub fn try_set_language(&mut self, code: &str) -> LocaleResult<Lang> {
        let lang =
            Lang::from_code(code).ok_or_else(|| LocaleError::UnsupportedLanguage(code.to_string()))?;
        self.set_language(lang);
        Ok(lang)
    }

    /// Translate `key` under the active language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(&self.active, key)
    }

    /// Translate `key`, or return `fallback` if no real translation exists.
    pub fn t_or<'a>(&self, key: &'a str, fallback: &'a str) -> &'a str {
        i18n::translate_or(&self.active, key, fallback)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// End the session and hand back the storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, UnavailableStorage};

    #[test]
    fn defaults_to_english_without_stored_value() {
        let session = LanguageSession::open(MemoryStorage::new(), &Config::default());
        assert_eq!(session.active(), &LanguageTag::Known(Lang::En));
        assert_eq!(session.t("nav.home"), "Home");
    }

    #[test]
    fn configured_default_applies() {
        let config = Config {
            default_language: Lang::So,
            ..Config::default()
        };
        let session = LanguageSession::open(MemoryStorage::new(), &config);
        assert_eq!(session.t("nav.home"), "Hoyga");
    }

    #[test]
    fn unrecognised_stored_value_is_kept() {
        let storage = MemoryStorage::with_entry("language", "fr");
        let session = LanguageSession::open(storage, &Config::default());
        assert_eq!(session.active().as_str(), "fr");
        assert_eq!(session.t("nav.home"), "Home");
    }

    #[test]
    fn blank_stored_value_uses_default() {
        for stored in ["", "  "] {
            let storage = MemoryStorage::with_entry("language", stored);
            let session = LanguageSession::open(storage, &Config::default());
            assert_eq!(session.active(), &LanguageTag::Known(Lang::En));
        }
    }

    #[test]
    fn set_language_writes_through() {
        let mut session = LanguageSession::open(MemoryStorage::new(), &Config::default());
        session.set_language(Lang::Am);
        assert!(session.active().is(Lang::Am));
        assert_eq!(
            session.storage().get("language").unwrap().as_deref(),
            Some("am")
        );
    }

    #[test]
    fn set_language_accepts_unsupported_code() {
        let mut session = LanguageSession::open(MemoryStorage::new(), &Config::default());
        session.set_language("xx");
        assert_eq!(session.active().as_str(), "xx");
        assert_eq!(
            session.storage().get("language").unwrap().as_deref(),
            Some("xx")
        );
    }

    #[test]
    fn try_set_language_rejects_unsupported_code() {
        let mut session = LanguageSession::open(MemoryStorage::new(), &Config::default());
        let err = session.try_set_language("fr").unwrap_err();
        assert!(matches!(err, LocaleError::UnsupportedLanguage(ref c) if c == "fr"));
        assert!(session.active().is(Lang::En));
        assert_eq!(session.storage().get("language").unwrap(), None);
        assert_eq!(session.try_set_language("ti").unwrap(), Lang::Ti);
    }

    #[test]
    fn failed_write_still_switches_language() {
        let mut session = LanguageSession::open(UnavailableStorage, &Config::default());
        session.set_language(Lang::Am);
        assert!(session.active().is(Lang::Am));
        assert_eq!(session.t("nav.home"), "መነሻ");
    }
}
