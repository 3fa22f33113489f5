use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::catalog::lifecycle::Transition;
use crate::catalog::seed::Seed;
use crate::clock::Clock;
use crate::error::{CatalogError, Result};
use crate::models::{new_signal_id, Signal, SignalEdit, SignalStatus};
use crate::storage::KeyValueSlot;

/// Owner of the canonical signal list.
///
/// Every mutation rewrites the whole list to the slot under `key`. A failed
/// write is logged and otherwise ignored: the in-memory list stays
/// authoritative for the rest of the session.
pub struct SignalStore<S: KeyValueSlot, C: Clock> {
    slot: S,
    key: String,
    clock: C,
    signals: Vec<Signal>,
}

impl<S: KeyValueSlot, C: Clock> SignalStore<S, C> {
    /// Restore the list stored under `key`. Absent, unreadable or corrupt data
    /// falls back to `seed`.
    pub fn open(slot: S, key: impl Into<String>, seed: Seed, clock: C) -> Self {
        let key = key.into();
        let signals = match slot.read(&key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Signal>>(&bytes) {
                Ok(signals) => {
                    let signals = dedup_ids(signals);
                    info!("Loaded {} signals from '{}'", signals.len(), key);
                    signals
                }
                Err(e) => {
                    warn!(
                        "{}; starting from seed list",
                        CatalogError::PersistenceReadCorrupt(e.to_string())
                    );
                    seed.signals(clock.now())
                }
            },
            Ok(None) => {
                debug!("Nothing stored under '{}', starting from seed list", key);
                seed.signals(clock.now())
            }
            Err(e) => {
                warn!("Reading '{}' failed: {:#}; starting from seed list", key, e);
                seed.signals(clock.now())
            }
        };

        Self {
            slot,
            key,
            clock,
            signals,
        }
    }

    /// Flush the list one last time and hand the slot back.
    pub fn close(mut self) -> S {
        self.persist();
        self.slot
    }

    /// All signals in store order, unfiltered.
    pub fn list(&self) -> &[Signal] {
        &self.signals
    }

    pub fn get(&self, id: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn create(&mut self, signal: Signal) -> Result<&Signal> {
        if self.position(&signal.id).is_some() {
            return Err(CatalogError::DuplicateId(signal.id));
        }
        info!("Created signal {} ({} {})", signal.id, signal.symbol, signal.direction);
        self.signals.push(signal);
        self.persist();
        let last = self.signals.len() - 1;
        Ok(&self.signals[last])
    }

    /// Create an ACTIVE signal with a fresh id, stamped with the store clock.
    pub fn publish(&mut self, edit: SignalEdit) -> Result<&Signal> {
        let signal = Signal::publish(edit, new_signal_id(), self.clock.now());
        self.create(signal)
    }

    /// Replace every editable field of `id`. Identity, creation time and
    /// status are untouched.
    pub fn update(&mut self, id: &str, edit: SignalEdit) -> Result<&Signal> {
        let idx = self.require(id)?;
        self.signals[idx].apply(edit);
        info!("Updated signal {}", id);
        self.persist();
        Ok(&self.signals[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<Signal> {
        let idx = self.require(id)?;
        let removed = self.signals.remove(idx);
        info!("Deleted signal {} ({})", removed.id, removed.symbol);
        self.persist();
        Ok(removed)
    }

    /// Set the status of `id` and nothing else. Repeating the current status
    /// succeeds.
    pub fn set_status(&mut self, id: &str, status: SignalStatus) -> Result<Transition> {
        let idx = self.require(id)?;
        let transition = Transition::new(self.signals[idx].status, status);
        self.signals[idx].status = status;
        if transition.is_noop() {
            debug!("Signal {} already {}", id, status);
        } else {
            info!("Signal {} status {}", id, transition);
        }
        self.persist();
        Ok(transition)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.signals.iter().position(|s| s.id == id)
    }

    fn require(&self, id: &str) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn persist(&mut self) {
        let bytes = match serde_json::to_vec(&self.signals) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("{}", CatalogError::PersistenceWrite(e.to_string()));
                return;
            }
        };
        if let Err(e) = self.slot.write(&self.key, &bytes) {
            warn!("{}", CatalogError::PersistenceWrite(format!("{:#}", e)));
        }
    }
}

/// Keep the first signal for each id.
fn dedup_ids(signals: Vec<Signal>) -> Vec<Signal> {
    let mut seen = HashSet::new();
    signals
        .into_iter()
        .filter(|s| {
            let first = seen.insert(s.id.clone());
            if !first {
                warn!("Dropping stored signal with repeated id {}", s.id);
            }
            first
        })
        .collect()
}
