// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{Point, Position};
use chronologizer_core::MAX_LABEL_CHARS;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Space left around the drawn timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            left: 120.0,
            right: 120.0,
            top: 20.0,
        }
    }
}

/// Layout parameters for drawing entries.  Every entry gets a row of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub padding: Padding,

    /// The height of each entry's row
    pub line_height: f64,

    /// From the top of a row down to the line/marker
    pub row_baseline_offset: f64,

    /// Radius of the circle drawn for a single point in time
    pub marker_radius: f64,

    /// Radius of the delete button
    pub delete_button_radius: f64,

    /// Single point: distance from the marker up to the date text
    pub point_date_offset: f64,

    /// Single point: distance from the marker down to the label
    pub point_label_offset: f64,

    /// Range: distance from the line up to the date text
    pub range_date_offset: f64,

    /// Range: distance from the line down to the label
    pub range_label_offset: f64,

    /// Single point: distance from the marker right to the delete button
    pub point_delete_offset: f64,

    /// Range: distance from the end of the line right to the delete button
    pub range_delete_offset: f64,

    /// Canvas height when there are no entries
    pub empty_canvas_height: f64,

    pub label_editor_width: f64,
    pub label_editor_height: f64,

    /// Longer labels are truncated when an edit is committed
    pub max_label_chars: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            padding: Padding::default(),
            line_height: 60.0,
            row_baseline_offset: 30.0,
            marker_radius: 7.0,
            delete_button_radius: 7.0,
            point_date_offset: 25.0,
            point_label_offset: 25.0,
            range_date_offset: 10.0,
            range_label_offset: 20.0,
            point_delete_offset: 50.0,
            range_delete_offset: 30.0,
            empty_canvas_height: 100.0,
            label_editor_width: 200.0,
            label_editor_height: 30.0,
            max_label_chars: MAX_LABEL_CHARS,
        }
    }
}

impl LayoutParams {
    /// The width left for the axis once the left and right padding are taken
    /// from the canvas width
    pub fn available_width(&self, canvas_width: f64) -> f64 {
        canvas_width - self.padding.left - self.padding.right
    }

    /// The y position of the line/marker in the given row
    pub fn row_baseline(&self, row: usize) -> f64 {
        self.padding.top + (row as f64 * self.line_height) + self.row_baseline_offset
    }

    /// The canvas height needed to draw the given number of rows
    pub fn canvas_height(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            self.empty_canvas_height
        } else {
            self.padding.top + (row_count as f64 * self.line_height)
        }
    }
}

/// A box that specifies the location and size of something (e.g. the label
/// editor)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// A box of the given size centred on the point
    pub fn centred_on(centre: Point, width: f64, height: f64) -> Self {
        Self {
            position: Point {
                x: centre.x - (width / 2.0),
                y: centre.y - (height / 2.0),
            },
            width,
            height,
        }
    }

    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}
