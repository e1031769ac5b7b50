// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization store for CivicVoice Et.
//!
//! A compile-time translation table with a deterministic fallback chain.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name      |
//! |------|----------|------------------|
//! | en   | English  | English          |
//! | am   | Amharic  | አማርኛ             |
//! | om   | Oromo    | Afaan Oromoo     |
//! | ti   | Tigrinya | ትግርኛ             |
//! | so   | Somali   | Soomaali         |
//! | aa   | Afar     | Qafaraf          |
//! | sid  | Sidamo   | Sidaamu Afoo     |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.home"`, `"feedback.submit"`.
//! Lookups fall back to English when a key is missing in the active
//! language. If the key is not declared at all, the key string itself is
//! returned (fail-open, never panics, never blank for a declared key).
//!
//! There is no interpolation engine. Strings that need a runtime value carry
//! a single `{value}` marker that callers replace with [`fill`].

mod catalog;
mod iso639;

pub use catalog::{
    fill, lookup, text, translate, translate_or, translated_keys, Key, Lang, LanguageTag, SENTINEL,
};
pub use iso639::{language_name, native_name, script, Script};
