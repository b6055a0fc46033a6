// SPDX-License-Identifier: MIT

//!
//! Free-form date parsing
//!
//! Text is matched against an ordered list of [`ParseStrategy`]s.  The first
//! strategy that recognises the whole (trimmed) string wins.
//!

use crate::{Instant, Year};
use chrono::{DateTime, Month, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// e.g. `428 BC`, `100bce`, `2024 AD`
    static ref ERA_YEAR: Regex = Regex::new(r"(?i)^(\d{1,5})\s*(BC|BCE|AD|CE)$").unwrap();

    /// e.g. `1066`, `-500`
    static ref BARE_YEAR: Regex = Regex::new(r"^-?\d{1,5}$").unwrap();

    /// e.g. `Mar 15, 43 BCE`, `March 15 12345`
    static ref ERA_CALENDAR_DATE: Regex =
        Regex::new(r"(?i)^([a-z]+)\s+(\d{1,2}),?\s+(\d{1,5})(?:\s*(BC|BCE|AD|CE))?$").unwrap();
}

/// Date-time formats tried by [`parse_calendar_date`]
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date formats tried by [`parse_calendar_date`]
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Errors that can arise when parsing date text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("No date given")]
    Empty,

    #[error(
        "`{0}` is not a recognised date. Use a year (e.g. 1066, -500, 428 BC) or an ISO date (e.g. 2024-01-15)"
    )]
    Unrecognised(String),
}

/// A single date grammar.  Given trimmed, non-empty text it either recognises
/// the whole string or returns `None`.
pub type ParseStrategy = fn(&str) -> Option<Instant>;

/// Turns free-form text into an [`Instant`] by trying each of its strategies
/// in order
#[derive(Clone, Debug)]
pub struct DateParser {
    strategies: Vec<ParseStrategy>,
}

impl Default for DateParser {
    /// Era years, then bare years, then calendar dates, then month-name dates
    /// with an era or a 5 digit year
    fn default() -> Self {
        Self {
            strategies: vec![
                parse_era_year,
                parse_bare_year,
                parse_calendar_date,
                parse_era_calendar_date,
            ],
        }
    }
}

impl DateParser {
    /// A parser with no strategies (recognises nothing)
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy.  It is tried after all existing strategies.
    pub fn with_strategy(mut self, strategy: ParseStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// The number of strategies
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Parse the text (leading and trailing whitespace ignored)
    pub fn parse(&self, text: &str) -> Result<Instant, DateParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DateParseError::Empty);
        }
        let instant = self
            .strategies
            .iter()
            .find_map(|strategy| strategy(text))
            .ok_or_else(|| DateParseError::Unrecognised(text.to_string()))?;
        trace!("parsed `{text}` as {instant}");
        Ok(instant)
    }
}

/// Parse text with the default [`DateParser`]
pub fn parse_date(text: &str) -> Result<Instant, DateParseError> {
    DateParser::default().parse(text)
}

/// Year to instant, failing if the year is out of range
fn year_to_instant(year: i64) -> Option<Instant> {
    Year::try_from(year).ok().map(Instant::start_of_year)
}

/// Negate the year if the era is BC or BCE
fn apply_era(year: i64, era: Option<&str>) -> i64 {
    match era.map(str::to_ascii_uppercase).as_deref() {
        Some("BC" | "BCE") => -year,
        _ => year,
    }
}

/// `<1-5 digits> <BC|BCE|AD|CE>`.  BC and BCE negate the year.
pub fn parse_era_year(text: &str) -> Option<Instant> {
    let captures = ERA_YEAR.captures(text)?;
    let year: i64 = captures[1].parse().ok()?;
    year_to_instant(apply_era(year, Some(&captures[2])))
}

/// A bare year of 1-5 digits with an optional leading minus
pub fn parse_bare_year(text: &str) -> Option<Instant> {
    if !BARE_YEAR.is_match(text) {
        return None;
    }
    year_to_instant(text.parse().ok()?)
}

/// General calendar dates: RFC 3339, RFC 2822, ISO date(-time)s, year-month,
/// slash dates and dates with month names.  Times without an offset are UTC.
pub fn parse_calendar_date(text: &str) -> Option<Instant> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(Instant::from_millis(date_time.timestamp_millis()));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(text) {
        return Some(Instant::from_millis(date_time.timestamp_millis()));
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Instant::from_naive(date_time));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(Instant::from_naive);
        }
    }

    // Year and month only (e.g. 2024-03)
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Instant::from_naive)
}

/// `<Mon|Month> <day>[,] <1-5 digits> [BC|BCE|AD|CE]`, the form full dates
/// are displayed in.  chrono's `%Y` can't read these years (no era, and no
/// more than 4 digits without a sign).
pub fn parse_era_calendar_date(text: &str) -> Option<Instant> {
    let captures = ERA_CALENDAR_DATE.captures(text)?;
    let month: Month = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let year: i64 = captures[3].parse().ok()?;
    let year = Year::try_from(apply_era(year, captures.get(4).map(|era| era.as_str()))).ok()?;
    NaiveDate::from_ymd_opt(year.value(), month.number_from_month(), day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Instant::from_naive)
}
