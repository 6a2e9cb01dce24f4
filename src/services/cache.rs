//! Query cache bookkeeping: which logical keys are stale, and who to tell
//! when one is invalidated.
//!
//! The cache never holds data itself. Readers such as
//! [`TagList`](crate::services::tag_list::TagList) keep their own copy and
//! consult the cache to decide when to refetch.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub const TAGS: &'static str = "get-tags";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn tags() -> Self {
        Self::new(Self::TAGS)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type Observer = Arc<dyn Fn(&QueryKey) + Send + Sync>;

#[derive(Debug, Clone, Copy)]
struct EntryState {
    stale: bool,
    generation: u64,
}

#[derive(Default)]
struct Inner {
    entries: RwLock<HashMap<QueryKey, EntryState>>,
    observers: RwLock<HashMap<QueryKey, Vec<(u64, Observer)>>>,
    next_observer: AtomicU64,
}

#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` to be called whenever `key` is invalidated.
    /// The registration lasts as long as the returned [`Subscription`].
    pub fn subscribe<F>(&self, key: QueryKey, observer: F) -> Subscription
    where
        F: Fn(&QueryKey) + Send + Sync + 'static,
    {
        let id = self.inner.next_observer.fetch_add(1, Ordering::Relaxed);
        self.inner
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.clone())
            .or_default()
            .push((id, Arc::new(observer)));

        Subscription {
            cache: Arc::downgrade(&self.inner),
            key,
            id,
        }
    }

    /// Mark `key` stale and notify its observers once each.
    pub fn invalidate(&self, key: &QueryKey) {
        let generation = {
            let mut entries = self
                .inner
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let entry = entries.entry(key.clone()).or_insert(EntryState {
                stale: true,
                generation: 0,
            });
            entry.stale = true;
            entry.generation += 1;
            entry.generation
        };

        // Observers run without any lock held so they may call back into the cache.
        let observers: Vec<Observer> = self
            .inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|list| list.iter().map(|(_, o)| o.clone()).collect())
            .unwrap_or_default();

        tracing::debug!(
            "Invalidated query '{}' (generation {}, {} observer(s))",
            key,
            generation,
            observers.len()
        );

        for observer in observers {
            observer(key);
        }
    }

    /// Keys that have never been filled are stale.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(true, |e| e.stale)
    }

    /// Number of times `key` has been invalidated.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(0, |e| e.generation)
    }

    /// Mark `key` fresh, but only if it hasn't been invalidated since
    /// `generation` was read. Returns whether the key is now fresh.
    pub fn mark_fresh(&self, key: &QueryKey, generation: u64) -> bool {
        let mut entries = self
            .inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key.clone()).or_insert(EntryState {
            stale: true,
            generation: 0,
        });
        if entry.generation == generation {
            entry.stale = false;
        }
        !entry.stale
    }

    pub fn observer_count(&self, key: &QueryKey) -> usize {
        self.inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(0, Vec::len)
    }
}

/// Observer registration; dropping it unsubscribes.
pub struct Subscription {
    cache: Weak<Inner>,
    key: QueryKey,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.cache.upgrade() else {
            return;
        };
        let mut observers = inner
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = observers.get_mut(&self.key) {
            list.retain(|(id, _)| *id != self.id);
            if list.is_empty() {
                observers.remove(&self.key);
            }
        }
    }
}
