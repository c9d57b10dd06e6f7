use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::domain::CachedRecord;
use super::source::{ListSource, SourceError};
use crate::consent::ConsentStore;
use crate::storage::KeyValueStore;

struct MemoryEntry<T> {
    records: Vec<T>,
    fetched_at: DateTime<Utc>,
}

/// Read-through cache for one named list.
///
/// Tier 1 is a process-lifetime entry, tier 2 a durable JSON mirror under
/// `cache:<name>` plus a `cache:<name>:fetched_at` timestamp in unix
/// milliseconds. Both tiers honor the same TTL and the functional consent
/// category. The cache is an explicit injectable object: whoever composes
/// the page owns it, and tests get per-instance isolation for free.
///
/// Two callers racing on the same list may each fetch and the later
/// write-through wins; for these small read-mostly lists that is accepted
/// rather than coordinated.
pub struct ListCache<T, S, F> {
    name: &'static str,
    ttl: Duration,
    store: Arc<S>,
    consent: ConsentStore<S>,
    source: F,
    memory: Mutex<Option<MemoryEntry<T>>>,
}

impl<T, S, F> ListCache<T, S, F>
where
    T: CachedRecord + Clone + Serialize + DeserializeOwned,
    S: KeyValueStore,
    F: ListSource<T>,
{
    pub fn new(name: &'static str, ttl: Duration, store: Arc<S>, source: F) -> Self {
        Self {
            name,
            ttl,
            consent: ConsentStore::new(store.clone()),
            store,
            source,
            memory: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the list, from cache when consent and freshness allow it,
    /// otherwise from the authoritative source.
    ///
    /// A source failure propagates and leaves both tiers untouched. Storage
    /// failures never propagate; they demote the affected tier to a miss.
    pub fn load(&self, force_refresh: bool) -> Result<Vec<T>, SourceError> {
        let now = Utc::now();
        let can_use_cache = self.consent.state().functional_granted();

        if can_use_cache && !force_refresh {
            if let Some(records) = self.memory_tier(now) {
                debug!(list = self.name, "serving from memory tier");
                return Ok(records);
            }
            if let Some(records) = self.durable_tier(now) {
                debug!(list = self.name, "serving from durable tier");
                return Ok(records);
            }
        }

        let mut records = self.source.fetch()?;
        records.retain(CachedRecord::is_complete);

        if can_use_cache {
            self.write_through(&records, now);
        } else {
            debug!(list = self.name, "functional consent not granted; skipping write-through");
        }

        Ok(records)
    }

    /// Clears both tiers for this list. Always allowed: removing state needs
    /// no consent.
    pub fn invalidate(&self) {
        *self.memory_lock() = None;
        for key in [self.data_key(), self.timestamp_key()] {
            if let Err(err) = self.store.remove(&key) {
                warn!(list = self.name, key = %key, error = %err, "failed to remove cache key");
            }
        }
    }

    fn memory_lock(&self) -> MutexGuard<'_, Option<MemoryEntry<T>>> {
        match self.memory.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn memory_tier(&self, now: DateTime<Utc>) -> Option<Vec<T>> {
        let guard = self.memory_lock();
        guard
            .as_ref()
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .map(|entry| entry.records.clone())
    }

    fn durable_tier(&self, now: DateTime<Utc>) -> Option<Vec<T>> {
        let fetched_at = self.read_timestamp()?;
        if now - fetched_at >= self.ttl {
            return None;
        }

        let raw = self.read_key(&self.data_key())?;
        let mut records: Vec<T> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(list = self.name, error = %err, "durable cache blob is malformed; ignoring");
                return None;
            }
        };
        records.retain(CachedRecord::is_complete);

        // Promote with the stored capture time so both tiers expire together.
        *self.memory_lock() = Some(MemoryEntry {
            records: records.clone(),
            fetched_at,
        });
        Some(records)
    }

    fn read_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.read_key(&self.timestamp_key())?;
        let millis = raw.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(millis)
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(list = self.name, key = %key, error = %err, "cache storage unavailable; treating as miss");
                None
            }
        }
    }

    fn write_through(&self, records: &[T], now: DateTime<Utc>) {
        *self.memory_lock() = Some(MemoryEntry {
            records: records.to_vec(),
            fetched_at: now,
        });

        let raw = match serde_json::to_string(records) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(list = self.name, error = %err, "could not encode cache blob; durable tier skipped");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.data_key(), &raw) {
            warn!(list = self.name, error = %err, "durable cache write failed");
            return;
        }
        if let Err(err) = self
            .store
            .set(&self.timestamp_key(), &now.timestamp_millis().to_string())
        {
            warn!(list = self.name, error = %err, "durable cache timestamp write failed");
        }
    }

    fn data_key(&self) -> String {
        format!("cache:{}", self.name)
    }

    fn timestamp_key(&self) -> String {
        format!("cache:{}:fetched_at", self.name)
    }
}
