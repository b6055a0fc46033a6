// SPDX-License-Identifier: MIT

//!
//! The Chronologizer timeline entry type
//!

use crate::{Instant, format_instant};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// The maximum number of characters in an edited label
pub const MAX_LABEL_CHARS: usize = 256;

/// Which of an entry's dates is being referred to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => write!(f, "start"),
            DateField::End => write!(f, "end"),
        }
    }
}

/// Errors that can arise in relation to an [`Entry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Start date cannot be after end date ({start} > {end})")]
    StartAfterEnd { start: Instant, end: Instant },

    #[error("The {0} date is required")]
    MissingDate(DateField),
}

/// A single item on the timeline.  If `start == end` it is a point in time,
/// otherwise it is a range.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    start: Instant,
    end: Instant,
    label: String,
}

impl Entry {
    /// Create an [`Entry`] if `start <= end`.  A missing or blank label is
    /// replaced by the default `"<start> - <end>"` label.
    pub fn from(start: Instant, end: Instant, label: Option<String>) -> Result<Entry, EntryError> {
        if start > end {
            return Err(EntryError::StartAfterEnd { start, end });
        }
        let label = match label {
            Some(label) if !label.trim().is_empty() => label,
            _ => default_label(start, end),
        };
        Ok(Entry { start, end, label })
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// The `(start, end)` pair
    pub fn span(&self) -> (Instant, Instant) {
        (self.start, self.end)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.  Unlike [`Entry::from`], a blank label is kept as is
    /// (the entry is then drawn without one).
    pub fn set_label<S: ToString>(&mut self, label: S) {
        self.label = label.to_string();
    }

    /// Whether the entry is a single point in time rather than a range
    pub fn is_single_point(&self) -> bool {
        self.start == self.end
    }
}

/// e.g. `1066 - 1087`
pub fn default_label(start: Instant, end: Instant) -> String {
    format!("{} - {}", format_instant(start), format_instant(end))
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize)]
struct RawEntry {
    start: Instant,
    end: Instant,
    label: Option<String>,
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_entry = RawEntry::deserialize(deserializer)?;
        Entry::from(raw_entry.start, raw_entry.end, raw_entry.label)
            .map_err(serde::de::Error::custom)
    }
}
