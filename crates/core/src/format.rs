// SPDX-License-Identifier: MIT

//!
//! Display formatting for instants
//!

use crate::{Instant, Year};
use chrono::Datelike;

/// Format an [`Instant`] for display.
///
/// The start of a year (as produced when parsing a bare year) is shown as just
/// the year, e.g. `1066` or `428 BCE`.  Anything else is shown as a full date,
/// e.g. `Jan 15, 2024`.
pub fn format_instant(instant: Instant) -> String {
    let Some(date_time) = instant.to_naive() else {
        return format!("{} ms", instant.millis());
    };

    let year = year_label(date_time.year());
    if instant.is_start_of_year() {
        year
    } else {
        format!("{} {}, {year}", date_time.format("%b"), date_time.day())
    }
}

fn year_label(year: i32) -> String {
    match Year::try_from(i64::from(year)) {
        Ok(year) => year.label(),
        // Beyond what can be typed in, but still a valid calendar year
        Err(_) if year < 0 => format!("{} BCE", year.unsigned_abs()),
        Err(_) => format!("{year}"),
    }
}
