//! In-memory cache implementation - used as fallback when Redis is
//! unavailable, and by the test suite.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use linkboard_core::ports::{Cache, CacheError};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// HashMap-backed cache behind an async RwLock.
///
/// Expired entries are reaped lazily: a read drops the expired entry it
/// hit, and every write sweeps the whole map. The sweep matters because
/// invalidation can orphan keys that no read will ever touch again;
/// without it those entries would outlive their TTL indefinitely. Data
/// is lost on process restart, which is fine for a cache whose contents
/// can always be recomputed from the post store.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if entry.is_expired() {
            drop(entries);
            self.entries.write().await.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(
            key.to_owned(),
            Entry {
                value: value.to_owned(),
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        cache.delete("key1").await.unwrap();
        assert_eq!(cache.get("key1").await, None);
    }

    #[tokio::test]
    async fn ttl_expires_entries() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("key1").await, None);
    }

    #[tokio::test]
    async fn writes_sweep_expired_entries() {
        let cache = InMemoryCache::new();
        for i in 0..8 {
            cache
                .set(&format!("stale:{i}"), "value", Some(Duration::from_millis(10)))
                .await
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Keys never read again (as after an invalidation) must still
        // leave the map once their TTL passes.
        cache.set("fresh", "value", None).await.unwrap();

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("fresh").await, Some("value".to_string()));
    }
}
