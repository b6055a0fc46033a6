// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Chronologizer project*
//!
//! This crate defines the basic datatypes used across the Chronologizer
//! project: the [`Instant`] that every date is normalised to, the free-form
//! [`DateParser`] (years, BC/BCE years and calendar dates), display
//! formatting, and the [`TimelineStore`] of [`Entry`]s that the renderer
//! draws.
//!
//! Everything here is synchronous and free of any drawing surface.  The types
//! aim to be valid once instantiated (e.g. an [`Entry`] never starts after it
//! ends).
//!
//! ```
//! use chronologizer_core::{format_instant, parse_date};
//!
//! let instant = parse_date("428 BC").unwrap();
//! assert_eq!(format_instant(instant), "428 BCE");
//! ```
//!

// Lets `year!` refer to `::chronologizer_core` from this crate's own tests
extern crate self as chronologizer_core;

mod date_parser;
mod entry;
mod format;
mod instant;
mod store;

pub use date_parser::*;
pub use entry::*;
pub use format::*;
pub use instant::*;
pub use store::*;
