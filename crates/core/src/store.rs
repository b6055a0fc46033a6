// SPDX-License-Identifier: MIT

//!
//! The ordered collection of timeline entries
//!

use crate::{Entry, EntryError, Instant};
use log::debug;
use thiserror::Error;

/// Errors that can arise when changing a [`TimelineStore`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("There is no entry at index {index} (there are {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// The timeline's entries in insertion order.  An entry's index is its handle
/// until the next mutation (removing an entry shifts later entries down by
/// one).  Every operation either succeeds or leaves the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineStore {
    entries: Vec<Entry>,
}

impl TimelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry, returning its index
    pub fn add(
        &mut self,
        start: Instant,
        end: Instant,
        label: Option<String>,
    ) -> Result<usize, StoreError> {
        let entry = Entry::from(start, end, label)?;
        debug!("adding entry `{}`", entry.label());
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// Remove and return the entry at the index
    pub fn remove(&mut self, index: usize) -> Result<Entry, StoreError> {
        self.check_index(index)?;
        let entry = self.entries.remove(index);
        debug!("removed entry {index} `{}`", entry.label());
        Ok(entry)
    }

    /// Replace the label of the entry at the index
    pub fn set_label<S: ToString>(&mut self, index: usize, label: S) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.entries[index].set_label(label);
        debug!("relabelled entry {index}");
        Ok(())
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.entries.len());
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(start, end)` of every entry, in order
    pub fn spans(&self) -> impl Iterator<Item = (Instant, Instant)> + '_ {
        self.entries.iter().map(Entry::span)
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
        }
    }
}
