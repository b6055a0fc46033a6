// SPDX-License-Identifier: MIT

//!
//! Events
//!

use serde::Serialize;
use std::fmt::Debug;

/// Changes that a frontend might want to react to (e.g. by redrawing).  Each
/// index is the one the entry had when the change happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineInteractionEvent {
    EntryAdded(usize),
    EntryDeleted(usize),
    LabelEdited(usize),
    Cleared,
}
