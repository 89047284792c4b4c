//! In-flight tracking for mint requests.
//!
//! A mint is keyed by its normalized character name. While a guard for a key
//! is alive, a second `begin` for the same key is refused.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Set of character names with a mint currently in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlightMints {
    active: Arc<Mutex<HashSet<String>>>,
}

impl InFlightMints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `character_name`. Returns `None` when a mint for it is already
    /// running.
    pub fn begin(&self, character_name: &str) -> Option<InFlightGuard> {
        let key = normalize(character_name);
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            key,
            active: Arc::clone(&self.active),
        })
    }

    pub fn is_in_flight(&self, character_name: &str) -> bool {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&normalize(character_name))
    }

    pub fn len(&self) -> usize {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its key on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    key: String,
    active: Arc<Mutex<HashSet<String>>>,
}

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

fn normalize(character_name: &str) -> String {
    character_name.trim().to_lowercase()
}
