// SPDX-License-Identifier: PMPL-1.0-or-later

//! Composition of session, document and presentation policy.
//!
//! A UI layer owns one [`LocaleHost`] per session. Language changes go
//! through it so the presentation policy runs synchronously after every
//! change, before `change_language` returns.

use crate::config::Config;
use crate::error::LocaleResult;
use crate::i18n::{Lang, LanguageTag};
use crate::presentation::{apply_presentation_policy, DocumentSurface, PresentationPolicy};
use crate::session::LanguageSession;
use crate::storage::PreferenceStorage;

pub struct LocaleHost<S: PreferenceStorage, D: DocumentSurface> {
    session: LanguageSession<S>,
    document: D,
    policy: PresentationPolicy,
    strict: bool,
}

impl<S: PreferenceStorage, D: DocumentSurface> LocaleHost<S, D> {
    /// Open the session and apply the policy for the starting language.
    pub fn start(storage: S, document: D, config: &Config) -> Self {
        let mut host = Self {
            session: LanguageSession::open(storage, config),
            document,
            policy: PresentationPolicy {
                clear_stale_override: config.clear_stale_override,
            },
            strict: config.strict_language_codes,
        };
        host.apply();
        host
    }

    /// Switch language, persist it and re-apply the presentation policy.
    ///
    /// With `strict_language_codes` an unsupported code is rejected and
    /// nothing changes; otherwise any code is accepted.
    pub fn change_language(&mut self, code: &str) -> LocaleResult<LanguageTag> {
        if self.strict {
            self.session.try_set_language(code)?;
        } else {
            self.session.set_language(code);
        }
        self.apply();
        Ok(self.session.active().clone())
    }

    /// Typed switch; never rejected.
    pub fn change_to(&mut self, lang: Lang) {
        self.session.set_language(lang);
        self.apply();
    }

    pub fn active(&self) -> &LanguageTag {
        self.session.active()
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.session.t(key)
    }

    pub fn t_or<'a>(&self, key: &'a str, fallback: &'a str) -> &'a str {
        self.session.t_or(key, fallback)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Tear down, returning the session and the document.
    pub fn into_parts(self) -> (LanguageSession<S>, D) {
        (self.session, self.document)
    }

    fn apply(&mut self) {
        apply_presentation_policy(&mut self.document, self.session.active(), self.policy);
    }
}
