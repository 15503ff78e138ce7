use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::models::{ActivityRecord, DietaryRecord};

/// A cached response body, tagged by the resource it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    Activity(Vec<ActivityRecord>),
    Dietary(Vec<DietaryRecord>),
}

impl CachedPayload {
    pub fn len(&self) -> usize {
        match self {
            CachedPayload::Activity(records) => records.len(),
            CachedPayload::Dietary(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keyed store of previously fetched responses.
///
/// Safe to share between tasks on a multi-threaded runtime. The lock is only
/// held for the duration of a single map operation.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CachedPayload>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CachedPayload>> {
        // A panic mid-operation cannot leave the map half-updated, so a
        // poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<CachedPayload> {
        self.entries().get(key).cloned()
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    pub fn set(&self, key: impl Into<String>, payload: CachedPayload) {
        self.entries().insert(key.into(), payload);
    }

    /// Remove every entry whose key starts with `prefix`. Returns the number removed.
    pub fn invalidate(&self, prefix: &str) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        debug!(prefix = prefix, removed = removed, "Invalidated cache entries");
        removed
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
