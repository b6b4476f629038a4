//! Memoized results of previously executed statements.

use quarry_core::stmt::Rows;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use tokio::time::Instant;

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// Result stored for a statement: its rows, or `None` when the statement did
/// not produce a row set.
pub type CacheEntry = Option<Arc<Rows>>;

/// Bounds on how long and how many results are kept.
///
/// The default keeps every result for the life of the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Evict the least recently used entries past this many.
    pub max_entries: Option<usize>,

    /// Entries older than this are dropped on lookup.
    #[serde(rename = "ttl_secs", deserialize_with = "ttl_from_secs")]
    pub ttl: Option<Duration>,

    /// Drop a connector's entries after it runs a statement other than a
    /// `SELECT`.
    pub invalidate_on_write: bool,
}

/// Results keyed by connector name and exact statement text.
///
/// One cache is shared by every connector of a [`Registry`](crate::Registry).
/// Entries are replaced wholesale; the last writer wins.
#[derive(Debug, Default)]
pub struct QueryCache {
    policy: CachePolicy,
    entries: Mutex<IndexMap<(String, String), Slot>>,
}

#[derive(Debug)]
struct Slot {
    entry: CacheEntry,
    stored_at: Instant,
}

impl CachePolicy {
    pub fn unbounded() -> CachePolicy {
        CachePolicy::default()
    }

    pub fn max_entries(mut self, max_entries: usize) -> CachePolicy {
        self.max_entries = Some(max_entries);
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> CachePolicy {
        self.ttl = Some(ttl);
        self
    }

    pub fn invalidate_on_write(mut self, invalidate_on_write: bool) -> CachePolicy {
        self.invalidate_on_write = invalidate_on_write;
        self
    }
}

impl QueryCache {
    pub fn new(policy: CachePolicy) -> QueryCache {
        QueryCache {
            policy,
            entries: Mutex::default(),
        }
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Looks up the result stored for `sql` on `connector`.
    ///
    /// Returns `None` on a miss. A hit on a statement without rows returns
    /// `Some(None)`.
    pub fn get(&self, connector: &str, sql: &str) -> Option<CacheEntry> {
        let mut entries = self.lock();
        let key = (connector.to_string(), sql.to_string());

        let index = entries.get_index_of(&key)?;

        if let Some(ttl) = self.policy.ttl {
            if entries[index].stored_at.elapsed() >= ttl {
                entries.shift_remove_index(index);
                tracing::debug!(connector, sql, "cache entry expired");
                return None;
            }
        }

        // Most recently used entries live at the back
        if self.policy.max_entries.is_some() {
            let last = entries.len() - 1;
            entries.move_index(index, last);
        }

        tracing::debug!(connector, sql, "cache hit");
        entries.get(&key).map(|slot| slot.entry.clone())
    }

    /// Stores the result of `sql` on `connector`, replacing any previous one.
    pub fn insert(&self, connector: &str, sql: &str, entry: CacheEntry) {
        let mut entries = self.lock();
        let key = (connector.to_string(), sql.to_string());

        entries.shift_remove(&key);
        entries.insert(
            key,
            Slot {
                entry,
                stored_at: Instant::now(),
            },
        );
        tracing::debug!(connector, sql, "cache store");

        if let Some(max_entries) = self.policy.max_entries {
            while entries.len() > max_entries {
                if let Some(((connector, sql), _)) = entries.shift_remove_index(0) {
                    tracing::debug!(%connector, %sql, "cache evict");
                }
            }
        }
    }

    /// Drops every entry stored for `connector`.
    pub fn invalidate(&self, connector: &str) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|(name, _), _| name != connector);
        tracing::debug!(
            connector,
            dropped = before - entries.len(),
            "cache invalidated"
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are replaced wholesale, so a panic while the lock is held
    // cannot leave one half written.
    fn lock(&self) -> MutexGuard<'_, IndexMap<(String, String), Slot>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn ttl_from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}
