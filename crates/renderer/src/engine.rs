// SPDX-License-Identifier: MIT

//!
//! The `chronologizer-renderer` engine
//!

mod axis;
mod entry;
mod events;
mod layout_params;
mod point;
mod primitives;

pub use axis::*;
pub use entry::*;
pub use events::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;

use chronologizer_core::{
    DateField, DateParseError, DateParser, Entry, EntryError, StoreError, TimelineStore,
    format_instant,
};
use log::{debug, trace};
use thiserror::Error;

/// The default canvas width (until a frontend sets the real one)
pub const DEFAULT_CANVAS_WIDTH: f64 = 1000.0;

/// Errors that the engine can return to a frontend (to show to the user)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid start date: {0}")]
    InvalidStartDate(DateParseError),

    #[error("Invalid end date: {0}")]
    InvalidEndDate(DateParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Axis(#[from] AxisError),

    #[error("No label is being edited")]
    NotEditing,
}

impl From<EntryError> for EngineError {
    fn from(error: EntryError) -> Self {
        EngineError::Store(StoreError::Entry(error))
    }
}

/// The core `chronologizer-renderer` engine.  This owns one timeline's state
/// (its entries, which label is being edited, layout and canvas size) and
/// does every calculation a frontend needs to draw it.
///
/// Nothing is global, so any number of independent timelines can exist side
/// by side.
pub struct Engine {
    /// The timeline's entries
    store: TimelineStore,

    /// Turns user-entered text into instants
    parser: DateParser,

    /// The index of the entry whose label is being edited (if any)
    editing_index: Option<usize>,

    /// The timeline's layout
    layout_params: LayoutParams,

    /// The width of the canvas (including the left and right padding)
    canvas_width: f64,

    /// All changes that an external programme might be interested in
    interaction_events: Vec<TimelineInteractionEvent>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(LayoutParams::default())
    }
}

impl Engine {
    /// Create a new, empty, engine
    pub fn new(layout_params: LayoutParams) -> Self {
        Self {
            store: TimelineStore::new(),
            parser: DateParser::default(),
            editing_index: None,
            layout_params,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            interaction_events: Vec::new(),
        }
    }

    /// Use a different date parser (e.g. one with extra strategies)
    pub fn with_parser(mut self, parser: DateParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn layout_params(&self) -> LayoutParams {
        self.layout_params
    }

    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        debug!("engine set layout params");
        self.layout_params = layout_params;
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Set the full width of the canvas (padding included)
    pub fn set_canvas_width(&mut self, canvas_width: f64) {
        trace!("set_canvas_width {canvas_width}");
        self.canvas_width = canvas_width;
    }

    /// The height of canvas needed to draw every entry
    pub fn canvas_height(&self) -> f64 {
        self.layout_params.canvas_height(self.store.len())
    }

    /// Add an entry from user-entered text, returning the new entry's index.
    /// A blank label means the default label is used.
    pub fn add_from_text(
        &mut self,
        start: &str,
        end: &str,
        label: &str,
    ) -> Result<usize, EngineError> {
        if start.trim().is_empty() {
            return Err(EntryError::MissingDate(DateField::Start).into());
        }
        if end.trim().is_empty() {
            return Err(EntryError::MissingDate(DateField::End).into());
        }

        let start = self
            .parser
            .parse(start)
            .map_err(EngineError::InvalidStartDate)?;
        let end = self.parser.parse(end).map_err(EngineError::InvalidEndDate)?;
        let label = (!label.trim().is_empty()).then(|| label.to_string());

        let index = self.store.add(start, end, label)?;
        self.interaction_events
            .push(TimelineInteractionEvent::EntryAdded(index));
        Ok(index)
    }

    /// Delete the entry at the index
    pub fn delete(&mut self, index: usize) -> Result<Entry, EngineError> {
        let entry = self.store.remove(index)?;

        // Keep pointing at the same entry (or stop editing if it's gone)
        self.editing_index = match self.editing_index {
            Some(editing) if editing == index => None,
            Some(editing) if editing > index => Some(editing - 1),
            other => other,
        };

        self.interaction_events
            .push(TimelineInteractionEvent::EntryDeleted(index));
        Ok(entry)
    }

    /// Delete every entry
    pub fn clear(&mut self) {
        self.store.clear();
        self.editing_index = None;
        self.interaction_events
            .push(TimelineInteractionEvent::Cleared);
    }

    /// The index of the entry whose label is being edited (if any)
    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Start editing the label of the entry at the index (abandoning any
    /// other edit)
    pub fn begin_label_edit(&mut self, index: usize) -> Result<(), EngineError> {
        if self.store.get(index).is_none() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.store.len(),
            }
            .into());
        }
        debug!("editing label {index}");
        self.editing_index = Some(index);
        Ok(())
    }

    /// Save the edited label.  The text is trimmed and truncated to the
    /// maximum label length.
    pub fn commit_label_edit(&mut self, text: &str) -> Result<(), EngineError> {
        let index = self.editing_index.ok_or(EngineError::NotEditing)?;
        let label: String = text
            .trim()
            .chars()
            .take(self.layout_params.max_label_chars)
            .collect();
        self.store.set_label(index, label)?;
        self.editing_index = None;
        self.interaction_events
            .push(TimelineInteractionEvent::LabelEdited(index));
        Ok(())
    }

    /// Stop editing without changing the label
    pub fn cancel_label_edit(&mut self) -> Result<(), EngineError> {
        self.editing_index.take().ok_or(EngineError::NotEditing)?;
        Ok(())
    }

    /// Get all events for dispatching & handling
    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, TimelineInteractionEvent> {
        self.interaction_events.drain(..)
    }

    /// The axis for the current padding
    pub fn axis(&self) -> AxisMapper {
        AxisMapper::new(self.layout_params.padding.left)
    }

    /// Calculate the scale for the current entries and canvas width
    pub fn scale_info(&self) -> Result<ScaleInfo, EngineError> {
        let available_width = self.layout_params.available_width(self.canvas_width);
        Ok(self
            .axis()
            .compute_scale(self.store.spans(), available_width)?)
    }

    /// Get all information needed to draw the timeline entries
    pub fn entries_for_drawing(&self) -> Result<Vec<EntryOut>, EngineError> {
        let scale_info = self.scale_info()?;
        let axis = self.axis();
        Ok(self
            .store
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| self.entry_for_drawing(index, entry, &axis, &scale_info))
            .collect())
    }

    fn entry_for_drawing(
        &self,
        index: usize,
        entry: &Entry,
        axis: &AxisMapper,
        scale_info: &ScaleInfo,
    ) -> EntryOut {
        let params = &self.layout_params;
        let y = params.row_baseline(index);
        let start_x = axis.project(entry.start(), scale_info);
        let end_x = axis.project(entry.end(), scale_info);

        let (marker, label_position, delete_x) = if entry.is_single_point() {
            let marker = EntryMarker::Point {
                circle: CircleOut {
                    centre: Point::new(start_x, y),
                    radius: params.marker_radius,
                },
                date: TextOut {
                    position: Point::new(start_x, y - params.point_date_offset),
                    text: format_instant(entry.start()),
                    anchor: TextAnchor::Middle,
                },
            };
            let label_position = Point::new(start_x, y + params.point_label_offset);
            (marker, label_position, start_x + params.point_delete_offset)
        } else {
            let marker = EntryMarker::Range {
                line: HorizontalLine {
                    x_start: start_x,
                    x_end: end_x,
                    y,
                },
                start_date: TextOut {
                    position: Point::new(start_x, y - params.range_date_offset),
                    text: format_instant(entry.start()),
                    anchor: TextAnchor::Start,
                },
                end_date: TextOut {
                    position: Point::new(end_x, y - params.range_date_offset),
                    text: format_instant(entry.end()),
                    anchor: TextAnchor::End,
                },
            };
            let label_position = Point::new(start_x, y)
                .midpoint(Point::new(end_x, y))
                .offset(0.0, params.range_label_offset);
            (marker, label_position, end_x + params.range_delete_offset)
        };

        let label = (!entry.label().is_empty()).then(|| TextOut {
            position: label_position,
            text: entry.label().to_string(),
            anchor: TextAnchor::Middle,
        });

        let label_editor = (self.editing_index == Some(index)).then(|| LabelEditor {
            position_and_size: PositionAndSize::centred_on(
                label_position,
                params.label_editor_width,
                params.label_editor_height,
            ),
            current_text: entry.label().to_string(),
            max_chars: params.max_label_chars,
            anchor: TextAnchor::Middle,
        });

        EntryOut {
            index,
            marker,
            label,
            delete_button: CircleOut {
                centre: Point::new(delete_x, y),
                radius: params.delete_button_radius,
            },
            label_editor,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use chronologizer_core::parse_date;

    fn engine_with(entries: &[(&str, &str, &str)]) -> Engine {
        let mut engine = Engine::default();
        for (start, end, label) in entries {
            engine.add_from_text(start, end, label).unwrap();
        }
        engine.drain_interaction_events();
        engine
    }

    #[test]
    fn add_from_text() {
        let mut engine = Engine::default();
        assert_eq!(engine.add_from_text("1066", "1087", ""), Ok(0));
        assert_eq!(engine.entries()[0].label(), "1066 - 1087");
        assert_eq!(engine.add_from_text(" 428 BC ", "-347", "Plato"), Ok(1));
        assert_eq!(engine.entries()[1].label(), "Plato");
        assert_eq!(
            engine.drain_interaction_events().collect::<Vec<_>>(),
            vec![
                TimelineInteractionEvent::EntryAdded(0),
                TimelineInteractionEvent::EntryAdded(1)
            ]
        );
    }

    #[test]
    fn add_from_text_rejects() {
        let mut engine = Engine::default();
        assert_eq!(
            engine.add_from_text("", "1087", ""),
            Err(EngineError::Store(StoreError::Entry(EntryError::MissingDate(
                DateField::Start
            ))))
        );
        assert_eq!(
            engine.add_from_text("1066", "  ", ""),
            Err(EngineError::from(EntryError::MissingDate(DateField::End)))
        );
        assert!(matches!(
            engine.add_from_text("whenever", "1087", ""),
            Err(EngineError::InvalidStartDate(DateParseError::Unrecognised(_)))
        ));
        assert!(matches!(
            engine.add_from_text("1066", "whenever", ""),
            Err(EngineError::InvalidEndDate(_))
        ));
        assert!(matches!(
            engine.add_from_text("1087", "1066", ""),
            Err(EngineError::Store(StoreError::Entry(
                EntryError::StartAfterEnd { .. }
            )))
        ));
        assert!(engine.store().is_empty());
        assert_eq!(engine.drain_interaction_events().count(), 0);
    }

    #[test]
    fn empty_timeline() {
        let engine = Engine::default();
        assert_eq!(engine.canvas_height(), 100.0);
        assert_eq!(engine.scale_info(), Ok(ScaleInfo::identity()));
        assert!(engine.entries_for_drawing().unwrap().is_empty());
    }

    #[test]
    fn canvas_too_narrow() {
        let mut engine = engine_with(&[("1066", "1087", "")]);
        engine.set_canvas_width(200.0);
        assert_eq!(
            engine.entries_for_drawing(),
            Err(EngineError::Axis(AxisError::NonPositiveWidth(-40.0)))
        );
    }

    #[test]
    fn range_geometry() {
        let mut engine = engine_with(&[("1000", "2000", "Millennium"), ("1500", "1600", "")]);
        engine.set_canvas_width(1240.0);
        let drawn = engine.entries_for_drawing().unwrap();
        assert_eq!(drawn.len(), 2);

        let first = &drawn[0];
        let EntryMarker::Range {
            line,
            start_date,
            end_date,
        } = &first.marker
        else {
            panic!("expected a range");
        };
        assert_relative_eq!(line.x_start, 120.0);
        assert_relative_eq!(line.x_end, 1120.0, max_relative = 1e-9);
        assert_eq!(line.y, 50.0);
        assert_eq!(start_date.text, "1000");
        assert_eq!(start_date.anchor, TextAnchor::Start);
        assert_eq!(start_date.position.y, 40.0);
        assert_eq!(end_date.text, "2000");
        assert_eq!(end_date.anchor, TextAnchor::End);

        let label = first.label.as_ref().unwrap();
        assert_eq!(label.text, "Millennium");
        assert_relative_eq!(label.position.x, 620.0, max_relative = 1e-9);
        assert_eq!(label.position.y, 70.0);
        assert_relative_eq!(first.delete_button.centre.x, 1150.0, max_relative = 1e-9);
        assert!(first.label_editor.is_none());

        // The second row
        let second = &drawn[1];
        assert_eq!(second.index, 1);
        assert_eq!(second.delete_button.centre.y, 110.0);
        assert_eq!(second.label.as_ref().unwrap().text, "1500 - 1600");
        assert_eq!(engine.canvas_height(), 140.0);
    }

    #[test]
    fn single_point_geometry() {
        let mut engine = engine_with(&[("2024-01-15", "2024-01-15", "Launch")]);
        engine.set_canvas_width(1040.0);
        let drawn = engine.entries_for_drawing().unwrap();
        let point = &drawn[0];
        assert!(point.is_single_point());

        let EntryMarker::Point { circle, date } = &point.marker else {
            panic!("expected a point");
        };
        // Widened by a year either side, so in the middle of the axis
        assert_relative_eq!(circle.centre.x, 120.0 + 400.0, max_relative = 1e-9);
        assert_eq!(circle.centre.y, 50.0);
        assert_eq!(circle.radius, 7.0);
        assert_eq!(date.text, "Jan 15, 2024");
        assert_eq!(date.position.y, 25.0);
        assert_eq!(date.anchor, TextAnchor::Middle);

        let label = point.label.as_ref().unwrap();
        assert_eq!(label.position.y, 75.0);
        assert_relative_eq!(point.delete_button.centre.x, 570.0, max_relative = 1e-9);
        let (min_x, max_x) = point.marker_x_extent();
        assert_relative_eq!(max_x - min_x, 14.0, max_relative = 1e-9);
    }

    #[test]
    fn blank_label_is_not_drawn() {
        let mut engine = engine_with(&[("1066", "1087", "")]);
        engine.begin_label_edit(0).unwrap();
        engine.commit_label_edit("   ").unwrap();
        let drawn = engine.entries_for_drawing().unwrap();
        assert!(drawn[0].label.is_none());
    }

    #[test]
    fn label_editing() {
        let mut engine = engine_with(&[("1066", "1087", ""), ("1", "2", "")]);

        assert_eq!(engine.commit_label_edit("x"), Err(EngineError::NotEditing));
        assert_eq!(engine.cancel_label_edit(), Err(EngineError::NotEditing));
        assert!(engine.begin_label_edit(2).is_err());

        engine.begin_label_edit(1).unwrap();
        let drawn = engine.entries_for_drawing().unwrap();
        assert!(drawn[0].label_editor.is_none());
        let editor = drawn[1].label_editor.as_ref().unwrap();
        assert_eq!(editor.current_text, "1 - 2");
        assert_eq!(editor.position_and_size.width, 200.0);
        assert_eq!(editor.position_and_size.position.y, 130.0 - 15.0);
        assert_eq!(editor.position_and_size.max_y(), 130.0 + 15.0);
        let label = drawn[1].label.as_ref().unwrap();
        assert!(editor.position_and_size.position.x < label.position.x);
        assert!(label.position.x < editor.position_and_size.max_x());

        engine.commit_label_edit("  Year one  ").unwrap();
        assert_eq!(engine.entries()[1].label(), "Year one");
        assert_eq!(engine.editing_index(), None);

        engine.begin_label_edit(0).unwrap();
        engine.cancel_label_edit().unwrap();
        assert_eq!(engine.entries()[0].label(), "1066 - 1087");

        assert_eq!(
            engine.drain_interaction_events().collect::<Vec<_>>(),
            vec![TimelineInteractionEvent::LabelEdited(1)]
        );
    }

    #[test]
    fn long_labels_are_truncated() {
        let mut engine = engine_with(&[("1066", "1087", "")]);
        engine.begin_label_edit(0).unwrap();
        engine.commit_label_edit(&"é".repeat(300)).unwrap();
        assert_eq!(engine.entries()[0].label().chars().count(), 256);
    }

    #[test]
    fn delete_keeps_editing_index_consistent() {
        let mut engine = engine_with(&[("1", "2", ""), ("3", "4", ""), ("5", "6", "")]);

        engine.begin_label_edit(2).unwrap();
        engine.delete(0).unwrap();
        assert_eq!(engine.editing_index(), Some(1));
        assert_eq!(engine.entries()[1].label(), "5 - 6");

        engine.delete(1).unwrap();
        assert_eq!(engine.editing_index(), None);

        assert!(matches!(
            engine.delete(1),
            Err(EngineError::Store(StoreError::IndexOutOfBounds { index: 1, len: 1 }))
        ));
    }

    #[test]
    fn clear() {
        let mut engine = engine_with(&[("1", "2", ""), ("3", "4", "")]);
        engine.begin_label_edit(0).unwrap();
        engine.clear();
        assert!(engine.store().is_empty());
        assert_eq!(engine.editing_index(), None);
        assert_eq!(
            engine.drain_interaction_events().collect::<Vec<_>>(),
            vec![TimelineInteractionEvent::Cleared]
        );
    }

    #[test]
    fn independent_engines() {
        let mut a = engine_with(&[("1", "2", "")]);
        let b = engine_with(&[("3", "4", ""), ("5", "6", "")]);
        a.clear();
        assert_eq!(a.store().len(), 0);
        assert_eq!(b.store().len(), 2);
    }

    #[test]
    fn extra_parse_strategy() {
        fn today(text: &str) -> Option<chronologizer_core::Instant> {
            (text == "today").then(|| parse_date("2026-10-16").unwrap())
        }
        let mut engine = Engine::default().with_parser(DateParser::default().with_strategy(today));
        assert_eq!(engine.add_from_text("2026", "today", ""), Ok(0));
        assert_eq!(engine.entries()[0].label(), "2026 - Oct 16, 2026");
    }
}
