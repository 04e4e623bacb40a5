//! Form-field persistence across page loads.
//!
//! Two independent key-value stores are involved:
//!
//! - the **durable** store (`localStorage` in the browser) survives closing
//!   and reopening the tab, and holds the last submitted `campo1..campo4` under
//!   `formValues`;
//! - the **session** store (`sessionStorage`) lives as long as the tab, and
//!   holds the single-use `formSubmitted` marker.
//!
//! A load without the marker is a fresh visit: the durable snapshot is wiped
//! and the form starts blank. A load with the marker follows one of our own
//! submissions: the snapshot is restored. Either way the marker is removed
//! once the decision is made.

use std::collections::HashMap;

use common::config::{FORM_SUBMITTED_KEY, FORM_SUBMITTED_VALUE, FORM_VALUES_KEY};
use common::model::form::FormFieldSnapshot;
use log::{debug, warn};

use super::error::StoreError;

/// String key-value storage with browser `Storage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);
}

/// In-memory store, used in tests and when browser storage is disabled.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Result of the load-time decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadDecision {
    /// No marker: blank form, durable snapshot removed.
    Fresh,
    /// Marker present: the saved snapshot, if one could be read.
    Resubmission(Option<FormFieldSnapshot>),
}

pub struct FormFieldPersistence<D, S> {
    durable: D,
    session: S,
}

impl<D: KeyValueStore, S: KeyValueStore> FormFieldPersistence<D, S> {
    pub fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Writes `snapshot` to durable storage as a flat JSON object.
    pub fn save(&mut self, snapshot: &FormFieldSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string(snapshot)?;
        self.durable.set(FORM_VALUES_KEY, &json)
    }

    pub fn mark_submitted(&mut self) -> Result<(), StoreError> {
        self.session.set(FORM_SUBMITTED_KEY, FORM_SUBMITTED_VALUE)
    }

    pub fn clear_submitted_marker(&mut self) {
        self.session.remove(FORM_SUBMITTED_KEY);
    }

    /// Any non-empty marker value counts.
    pub fn is_marked(&self) -> bool {
        self.session
            .get(FORM_SUBMITTED_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    /// Makes the fresh-load vs. resubmission decision and consumes the marker.
    pub fn decide(&mut self) -> LoadDecision {
        let decision = if self.is_marked() {
            LoadDecision::Resubmission(self.read_snapshot())
        } else {
            self.durable.remove(FORM_VALUES_KEY);
            LoadDecision::Fresh
        };
        self.clear_submitted_marker();
        debug!("form field load decision: {:?}", decision);
        decision
    }

    /// The saved snapshot when this load follows a submission, `None` on a
    /// fresh load (or when nothing readable was saved).
    pub fn load_if_resubmission(&mut self) -> Option<FormFieldSnapshot> {
        match self.decide() {
            LoadDecision::Resubmission(snapshot) => snapshot,
            LoadDecision::Fresh => None,
        }
    }

    fn read_snapshot(&self) -> Option<FormFieldSnapshot> {
        let raw = self.durable.get(FORM_VALUES_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("ignoring unreadable `{}`: {}", FORM_VALUES_KEY, e);
                None
            }
        }
    }
}
