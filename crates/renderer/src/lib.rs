// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Chronologizer project*
//!
//! This crate works out where everything on a timeline should be drawn.  It
//! does no drawing itself: a frontend (SVG, canvas, terminal, ...) asks the
//! engine for positions and text, draws them, and passes user actions back
//! to the engine.
//!
//! The engine is responsible for:
//!
//! - Owning a timeline's entries and label editing state
//! - Mapping instants onto a single linear x axis
//! - Laying out each entry's marker, dates, label and delete button
//! - Emitting events when the timeline changes
//!
//! ## Usage
//!
//! ```
//! use chronologizer_renderer::Engine;
//!
//! let mut engine = Engine::default();
//! engine.set_canvas_width(1240.0);
//! engine.add_from_text("1066", "1087", "William I").unwrap();
//! let drawn = engine.entries_for_drawing().unwrap();
//! assert_eq!(drawn[0].label.as_ref().unwrap().text, "William I");
//! ```
//!

pub mod config;
pub mod engine;

pub use config::*;
pub use engine::*;
