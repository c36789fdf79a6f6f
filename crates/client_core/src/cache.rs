//! Process-wide read cache keyed by request parameters. Mutations may only
//! invalidate entries, never write them, so displayed read state is always
//! a fetch-derived snapshot.

use std::{collections::HashMap, future::Future, hash::Hash};

use shared::{
    domain::{UserProfile, VideoId},
    protocol::CommentListResponse,
};
use tokio::sync::Mutex;

pub struct QueryCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached-or-fetch read. A hit never runs `fetch`; a miss runs it once
    /// and stores the result for subsequent reads of the same key. Fetch
    /// failures leave the cache untouched.
    pub async fn read<E, F, Fut>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.entries.lock().await.get(&key).cloned() {
            return Ok(hit);
        }
        let value = fetch().await?;
        self.entries.lock().await.insert(key, value.clone());
        Ok(value)
    }

    /// Marks the entry stale; the next read re-fetches.
    pub async fn invalidate(&self, key: &K) {
        self.entries.lock().await.remove(key);
    }

    pub async fn peek(&self, key: &K) -> Option<V> {
        self.entries.lock().await.get(key).cloned()
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The shared read state: one comment thread per video, plus the signed-in
/// user's profile (keyed by its only request shape, the unit key).
pub struct ReadCaches {
    pub comments: QueryCache<VideoId, CommentListResponse>,
    pub current_user: QueryCache<(), UserProfile>,
}

impl ReadCaches {
    pub fn new() -> Self {
        Self {
            comments: QueryCache::new(),
            current_user: QueryCache::new(),
        }
    }
}

impl Default for ReadCaches {
    fn default() -> Self {
        Self::new()
    }
}
