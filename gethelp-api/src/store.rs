/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! In-memory store of the most recent solutions.
//!
//! Entries are kept newest first and capped at [`MAX_STORED_SOLUTIONS`];
//! inserting past the cap evicts the oldest entry. The store lives as long
//! as the process does.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use gethelp_types::StoredSolution;
use thiserror::Error;

/// Hard cap on the number of entries kept.
pub const MAX_STORED_SOLUTIONS: usize = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("solution store lock poisoned")]
    Poisoned,
}

/// Bounded, insertion-ordered collection shared by every request handler.
///
/// Cloning is cheap and yields a handle to the same entries. Inserts are
/// serialized by the write guard, which keeps the ordering and cap intact
/// under concurrent submissions.
#[derive(Debug, Clone)]
pub struct SolutionStore {
    entries: Arc<RwLock<VecDeque<StoredSolution>>>,
    capacity: usize,
}

impl Default for SolutionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_STORED_SOLUTIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity + 1))),
            capacity,
        }
    }

    /// Add `entry` as the newest item, evicting the oldest one past capacity.
    pub fn insert(&self, entry: StoredSolution) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }

    /// Up to `limit` entries, newest first. Never fails and never mutates.
    pub fn list(&self, limit: usize) -> Vec<StoredSolution> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
