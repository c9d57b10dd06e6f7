//! Persisted cookie-consent record and its fail-closed read path.
//!
//! Absence of a record and a record with every optional category declined are
//! logically distinct states, even though both deny everything optional; the
//! [`ConsentState`] enum keeps that distinction explicit instead of collapsing
//! it into a nullable struct.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError};

/// Well-known durable key holding the serialized preferences blob.
pub const CONSENT_STORAGE_KEY: &str = "consent:preferences";

/// Current shape of the persisted blob. Bump when fields change meaning.
pub const CONSENT_SCHEMA_VERSION: u32 = 1;

/// The user's opt-in state for the four fixed consent categories.
///
/// `necessary` is not user-controllable: constructors set it and
/// normalization re-asserts it after every load, so a hand-edited blob
/// cannot opt out of strictly necessary operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPreferences {
    necessary: bool,
    pub analytics: bool,
    pub functional: bool,
    pub marketing: bool,
    pub schema_version: u32,
    pub updated_at: DateTime<Utc>,
}

impl ConsentPreferences {
    pub fn accept_all() -> Self {
        Self::custom(true, true, true)
    }

    pub fn necessary_only() -> Self {
        Self::custom(false, false, false)
    }

    pub fn custom(analytics: bool, functional: bool, marketing: bool) -> Self {
        Self {
            necessary: true,
            analytics,
            functional,
            marketing,
            schema_version: CONSENT_SCHEMA_VERSION,
            updated_at: Utc::now(),
        }
    }

    pub fn necessary(&self) -> bool {
        self.necessary
    }

    fn normalized(mut self) -> Self {
        self.necessary = true;
        self
    }
}

/// Explicit presence/absence of a recorded choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentState {
    /// No choice has ever been saved; every optional category fails closed.
    NotRecorded,
    Recorded(ConsentPreferences),
}

impl ConsentState {
    /// True only when a recorded choice grants the functional category.
    pub fn functional_granted(&self) -> bool {
        matches!(self, ConsentState::Recorded(prefs) if prefs.functional)
    }

    pub fn preferences(&self) -> Option<&ConsentPreferences> {
        match self {
            ConsentState::NotRecorded => None,
            ConsentState::Recorded(prefs) => Some(prefs),
        }
    }
}

/// Loads and saves the consent blob through the durable key-value seam.
#[derive(Debug, Clone)]
pub struct ConsentStore<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ConsentStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads the recorded state. A storage failure or a malformed blob reads
    /// as [`ConsentState::NotRecorded`]: consent can only be widened by a
    /// successfully parsed record.
    pub fn state(&self) -> ConsentState {
        match self.store.get(CONSENT_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<ConsentPreferences>(&raw) {
                Ok(prefs) => ConsentState::Recorded(prefs.normalized()),
                Err(err) => {
                    warn!(error = %err, "stored consent blob is malformed; treating as not recorded");
                    ConsentState::NotRecorded
                }
            },
            Ok(None) => ConsentState::NotRecorded,
            Err(err) => {
                warn!(error = %err, "consent storage unavailable; treating as not recorded");
                ConsentState::NotRecorded
            }
        }
    }

    /// Persists an explicit choice, stamping the update time.
    pub fn save(&self, preferences: ConsentPreferences) -> Result<ConsentPreferences, StorageError> {
        let mut preferences = preferences.normalized();
        preferences.updated_at = Utc::now();

        let raw = serde_json::to_string(&preferences)
            .map_err(|err| StorageError::Encoding(err.to_string()))?;
        self.store.set(CONSENT_STORAGE_KEY, &raw)?;
        Ok(preferences)
    }

    /// Removes the recorded choice entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(CONSENT_STORAGE_KEY)
    }
}
