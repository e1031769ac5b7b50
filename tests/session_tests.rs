// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistence tests for the session language preference

use civicvoice_i18n::config::Config;
use civicvoice_i18n::i18n::{Lang, LanguageTag};
use civicvoice_i18n::session::LanguageSession;
use civicvoice_i18n::storage::{FileStorage, MemoryStorage, PreferenceStorage, UnavailableStorage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_set_language_persists_every_supported_code() {
    let mut session = LanguageSession::open(MemoryStorage::new(), &Config::default());
    for lang in Lang::all() {
        session.set_language(*lang);
        assert_eq!(session.active(), &LanguageTag::Known(*lang));
        assert_eq!(
            session.storage().get("language").unwrap().as_deref(),
            Some(lang.code())
        );
    }
}

#[test]
fn test_restart_restores_persisted_language() {
    let dir = TempDir::new().unwrap();
    for lang in Lang::all() {
        let mut session = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
        session.set_language(*lang);
        drop(session);

        let restarted = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
        assert!(restarted.active().is(*lang), "{} should survive restart", lang);
    }
}

#[test]
fn test_restart_without_persisted_value_uses_default() {
    let dir = TempDir::new().unwrap();
    let session = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
    assert!(session.active().is(Lang::En));
    assert!(
        !dir.path().join("preferences.json").exists(),
        "opening a session should not write storage"
    );
}

#[test]
fn test_persisted_value_is_raw_code() {
    let dir = TempDir::new().unwrap();
    let mut session = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
    session.set_language(Lang::Ti);

    let content = fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["language"], "ti");
}

#[test]
fn test_custom_storage_key() {
    let config = Config {
        storage_key: "civicvoice.lang".to_string(),
        ..Config::default()
    };
    let storage = MemoryStorage::with_entry("civicvoice.lang", "so");
    let mut session = LanguageSession::open(storage, &config);
    assert!(session.active().is(Lang::So));

    session.set_language(Lang::Am);
    let storage = session.into_storage();
    assert_eq!(storage.get("civicvoice.lang").unwrap().as_deref(), Some("am"));
    assert_eq!(storage.get("language").unwrap(), None);
}

#[test]
fn test_corrupt_store_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("preferences.json"), "[1, 2").unwrap();
    let session = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
    assert!(session.active().is(Lang::En));
}

#[test]
fn test_write_after_corruption_survives_restart() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("preferences.json"), "[1, 2").unwrap();
    let mut session = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
    session.set_language(Lang::Am);
    drop(session);

    let restarted = LanguageSession::open(FileStorage::new(dir.path()), &Config::default());
    assert!(restarted.active().is(Lang::Am));
}

#[test]
fn test_empty_persisted_value_uses_default() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set("language", "").unwrap();
    let session = LanguageSession::open(storage, &Config::default());
    assert_eq!(session.active(), &LanguageTag::Known(Lang::En));
}

#[test]
fn test_write_failure_keeps_in_memory_change() {
    let mut session = LanguageSession::open(UnavailableStorage, &Config::default());
    session.set_language(Lang::So);
    assert!(session.active().is(Lang::So));
    assert_eq!(session.t("nav.home"), "Hoyga");
}
