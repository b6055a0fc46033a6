// SPDX-License-Identifier: MIT

//!
//! The Chronologizer instant and year types
//!

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The minimum year that can be entered (5 digits, negated)
pub const MIN_YEAR: i64 = -99999;

/// The maximum year that can be entered (5 digits)
pub const MAX_YEAR: i64 = 99999;

/// The length of a (non-leap) year in milliseconds
pub const ONE_YEAR_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

/// Errors that can arise in relation to a [`Year`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearError {
    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    OutOfRange(i64),
}

/// A proleptic Gregorian year using astronomical numbering, so `-428` is
/// 428 BCE and year `0` exists.
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    /// Whether the year is before year 0 (i.e. BCE)
    pub fn is_bce(&self) -> bool {
        self.0 < 0
    }

    /// The year as displayed to users: `1066` or `428 BCE`
    pub fn label(&self) -> String {
        if self.is_bce() {
            format!("{} BCE", self.0.unsigned_abs())
        } else {
            format!("{}", self.0)
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = YearError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(YearError::OutOfRange(value))
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A point in time: milliseconds since 1970-01-01T00:00:00 UTC.  Negative
/// values reach back into BCE years.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// The Unix epoch
    pub const EPOCH: Instant = Instant(0);

    pub fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    /// January 1st, 00:00:00 UTC of the given year
    pub fn start_of_year(year: Year) -> Self {
        NaiveDate::from_ymd_opt(year.value(), 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Instant::from_naive)
            .expect("every year in MIN_YEAR..=MAX_YEAR is inside chrono's range")
    }

    /// Convert a UTC naive date-time into an [`Instant`]
    pub fn from_naive(date_time: NaiveDateTime) -> Self {
        Instant(date_time.and_utc().timestamp_millis())
    }

    /// The UTC calendar date-time, if the instant is inside the range the
    /// calendar can represent
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.0).map(|date_time| date_time.naive_utc())
    }

    /// The calendar year the instant falls in
    pub fn year(&self) -> Option<i32> {
        self.to_naive().map(|date_time| date_time.year())
    }

    /// Whether the instant is exactly January 1st, 00:00:00 of some year
    pub fn is_start_of_year(&self) -> bool {
        self.to_naive().is_some_and(|date_time| {
            date_time.month() == 1
                && date_time.day() == 1
                && date_time.num_seconds_from_midnight() == 0
                && date_time.nanosecond() == 0
        })
    }

    /// Move the instant by a number of milliseconds, saturating at the bounds
    /// of the underlying integer
    pub fn saturating_add_millis(self, millis: i64) -> Self {
        Instant(self.0.saturating_add(millis))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chronologizer_macros::year;

    #[test]
    fn year_from() {
        assert!(Year::try_from(100_000_i64).is_err());
        assert!(Year::try_from(-100_000_i64).is_err());
        assert_eq!(Year::try_from(99_999_i64).unwrap(), Year::max());
        assert_eq!(Year::try_from(-99_999_i64).unwrap(), Year::min());
        assert_eq!(year!(1066).value(), 1066);
        assert_eq!(year!(-99999), Year::min());
        assert_eq!(year!(99999 AD), Year::max());
    }

    #[test]
    fn year_label() {
        assert_eq!(year!(1066).label(), "1066");
        assert_eq!(year!(0).label(), "0");
        assert_eq!(year!(428 BC).label(), "428 BCE");
        assert_eq!(year!(428 bce), year!(-428));
    }

    #[test]
    fn year_deserialise() {
        let ok: Year = serde_json::from_str("-428").unwrap();
        assert_eq!(ok.value(), -428);
        assert!(serde_json::from_str::<Year>("123456").is_err());
    }

    #[test]
    fn start_of_year() {
        assert_eq!(Instant::start_of_year(year!(1970)), Instant::EPOCH);
        assert_eq!(
            Instant::start_of_year(year!(1971)).millis(),
            ONE_YEAR_MILLIS
        );
        let bce = Instant::start_of_year(year!(428 BCE));
        assert!(bce < Instant::EPOCH);
        assert_eq!(bce.year(), Some(-428));
        assert!(bce.is_start_of_year());
    }

    #[test]
    fn extreme_years_are_representable() {
        let earliest = Instant::start_of_year(Year::min());
        let latest = Instant::start_of_year(Year::max());
        assert_eq!(earliest.year(), Some(MIN_YEAR as i32));
        assert_eq!(latest.year(), Some(MAX_YEAR as i32));
        assert!(earliest < latest);
    }

    #[test]
    fn not_start_of_year() {
        let jan_1_plus_1ms = Instant::start_of_year(year!(2000)).saturating_add_millis(1);
        assert!(!jan_1_plus_1ms.is_start_of_year());
        assert!(Instant::from_millis(i64::MAX).to_naive().is_none());
        assert!(!Instant::from_millis(i64::MAX).is_start_of_year());
    }

    #[test]
    fn serialise_transparent() {
        let instant = Instant::from_millis(-42);
        assert_eq!(serde_json::to_string(&instant).unwrap(), "-42");
    }
}
