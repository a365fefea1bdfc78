//! Key-value preference store contract.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for small persisted strings: the birth profile fields, the
/// last-seen-date marker and one cached reading per calendar date.
///
/// The core only needs get/set-by-key string semantics; the persistence
/// mechanism lives in the infrastructure crate.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Returns the stored value for `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<()>;
}
