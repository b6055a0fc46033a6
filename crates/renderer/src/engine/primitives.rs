// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{Point, PositionAndSize};
use serde::Serialize;
use std::fmt::Debug;

/// Which part of the text sits on its x position (as with SVG's
/// `text-anchor`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub anchor: TextAnchor,
}

/// Information needed to draw a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleOut {
    pub centre: Point,
    pub radius: f64,
}

/// Information needed to draw a horizontal line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalLine {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

/// Where to put a text box for editing a label, and what to put in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelEditor {
    pub position_and_size: PositionAndSize,
    pub current_text: String,
    pub max_chars: usize,
    pub anchor: TextAnchor,
}
