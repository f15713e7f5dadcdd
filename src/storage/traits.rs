use anyhow::Result;
use async_trait::async_trait;

/// Narrow key-value seam over the local persistence mechanism.
/// This allows swapping the file-backed store for a server-backed one
/// without changing any call site.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw record under a key, if one exists
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw record under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the record under a key; removing an absent key is fine
    async fn remove(&self, key: &str) -> Result<()>;
}
