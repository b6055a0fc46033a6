// SPDX-License-Identifier: MIT

//!
//! Entry
//!

use crate::{CircleOut, HorizontalLine, LabelEditor, TextOut};
use serde::Serialize;
use std::fmt::Debug;

/// How an entry is marked on its row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryMarker {
    /// A single point in time: a circle with the date above it
    Point { circle: CircleOut, date: TextOut },

    /// A range: a line with the start date above its start and the end date
    /// above its end
    Range {
        line: HorizontalLine,
        start_date: TextOut,
        end_date: TextOut,
    },
}

/// Information needed to draw an entry on a timeline (for use outside of the
/// engine)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryOut {
    /// The entry's index in the store (valid until the next change)
    pub index: usize,

    pub marker: EntryMarker,

    /// `None` when the label is blank
    pub label: Option<TextOut>,

    /// Clicking this deletes the entry
    pub delete_button: CircleOut,

    /// Present only for the entry whose label is being edited
    pub label_editor: Option<LabelEditor>,
}

impl EntryOut {
    pub fn is_single_point(&self) -> bool {
        matches!(self.marker, EntryMarker::Point { .. })
    }

    /// The leftmost and rightmost x positions of the marker
    pub fn marker_x_extent(&self) -> (f64, f64) {
        match &self.marker {
            EntryMarker::Point { circle, .. } => (
                circle.centre.x - circle.radius,
                circle.centre.x + circle.radius,
            ),
            EntryMarker::Range { line, .. } => (line.x_start, line.x_end),
        }
    }
}
