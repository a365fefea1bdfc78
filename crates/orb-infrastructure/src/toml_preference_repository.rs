//! File-backed preference store.
//!
//! Preferences are a flat string map serialized as TOML. Every write
//! rewrites the whole file through a temp file + rename so a crash mid-write
//! never leaves a torn store behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use orb_core::preferences::PreferenceRepository;
use orb_core::{OrbError, Result};

use crate::paths;

/// `PreferenceRepository` persisted as a TOML string map on disk.
///
/// The whole map is held in memory behind a mutex; the file is read once at
/// construction and rewritten on every mutation.
pub struct TomlPreferenceRepository {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl TomlPreferenceRepository {
    /// Opens the store at the default location,
    /// `~/.config/orb/preferences.toml`.
    ///
    /// # Errors
    ///
    /// Returns `Config` when the home directory cannot be determined, or an
    /// IO/parse error when the file exists but cannot be loaded.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::preferences_file()?)
    }

    /// Opens the store at `path`, creating an empty one when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an IO error when the file cannot be read and `Serialization`
    /// when it cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = load_map(&path)?;
        debug!(path = %path.display(), entries = values.len(), "preference store opened");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(values)?;
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn load_map(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    toml::from_str(&content).map_err(OrbError::from)
}

#[async_trait]
impl PreferenceRepository for TomlPreferenceRepository {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().await;
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)?;
        info!(key, "preference stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().await;
        if values.remove(key).is_some() {
            self.flush(&values)?;
            info!(key, "preference removed");
        }
        Ok(())
    }
}
