//! In-memory preference store for tests and hosts without a filesystem.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use orb_core::Result;
use orb_core::preferences::PreferenceRepository;

/// `PreferenceRepository` backed by a HashMap. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryPreferenceRepository {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
