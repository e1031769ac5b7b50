// SPDX-License-Identifier: PMPL-1.0-or-later

//! Durable key-value storage for user preferences.
//!
//! Mirrors per-browser local storage: string keys, raw string values, no
//! envelope or versioning. The session layer stores one key here.

use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used by [`FileStorage`] inside its directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// A durable string key-value store.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local storage. Values live as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry, as if written by an earlier session.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object in `<dir>/preferences.json`.
///
/// Every `get` reads the file again so two handles on the same directory
/// observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(directory: &Path) -> Self {
        Self {
            path: directory.join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    /// Write one entry. An unreadable existing file is replaced rather than
    /// blocking the write; the new file is renamed into place.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all().unwrap_or_else(|err| {
            log::warn!("discarding unreadable preferences: {:#}", err);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let payload = serde_json::to_string_pretty(&values)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload)
            .with_context(|| format!("writing {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Storage that is disabled: reads find nothing and writes fail, like a
/// browser with storage turned off or over quota.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("storage unavailable, cannot write {:?}", key))
    }
}
