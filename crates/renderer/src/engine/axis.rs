// SPDX-License-Identifier: MIT

//!
//! Mapping instants onto the x axis
//!

use chronologizer_core::{Instant, ONE_YEAR_MILLIS};
use log::trace;
use serde::Serialize;
use thiserror::Error;

/// Errors that can arise when calculating a [`ScaleInfo`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AxisError {
    /// The width left for drawing (canvas width less the margins) must be
    /// positive
    #[error("Available drawing width `{0}` must be positive")]
    NonPositiveWidth(f64),
}

/// A linear scale from the earliest instant to the latest instant.  Always
/// recalculated from the current entries, never stored between renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleInfo {
    /// The instant drawn at the left margin
    pub min: Instant,

    /// The instant drawn at the right margin
    pub max: Instant,

    /// Pixels per millisecond
    pub scale: f64,
}

impl ScaleInfo {
    /// The scale used when there is nothing to draw.  Only there to avoid
    /// dividing by zero.
    pub fn identity() -> Self {
        Self {
            min: Instant::from_millis(0),
            max: Instant::from_millis(1),
            scale: 1.0,
        }
    }

    /// The number of milliseconds covered by the scale
    pub fn range_millis(&self) -> i64 {
        self.max.millis().saturating_sub(self.min.millis())
    }
}

/// Maps instants to x positions.  One global linear scale is used for every
/// entry so that durations can be compared by eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    /// The x position of the scale's minimum
    pub left_margin: f64,
}

impl AxisMapper {
    pub fn new(left_margin: f64) -> Self {
        Self { left_margin }
    }

    /// Calculate the scale needed to fit every `(start, end)` span into the
    /// available width.
    ///
    /// If every span is the same single point the range is widened by a year
    /// either side, so that the point sits in the middle of the axis.
    pub fn compute_scale<I>(&self, spans: I, available_width: f64) -> Result<ScaleInfo, AxisError>
    where
        I: IntoIterator<Item = (Instant, Instant)>,
    {
        let mut spans = spans.into_iter().peekable();
        if spans.peek().is_none() {
            return Ok(ScaleInfo::identity());
        }
        if !(available_width.is_finite() && available_width > 0.0) {
            return Err(AxisError::NonPositiveWidth(available_width));
        }

        let (mut min, mut max) = spans.fold(
            (Instant::from_millis(i64::MAX), Instant::from_millis(i64::MIN)),
            |(min, max), (start, end)| (min.min(start), max.max(end)),
        );

        if max <= min {
            min = min.saturating_add_millis(-ONE_YEAR_MILLIS);
            max = max.saturating_add_millis(ONE_YEAR_MILLIS);
        }

        let range = max.millis() as f64 - min.millis() as f64;
        let scale = available_width / range;
        trace!("scale: min {min}, max {max}, {scale} px/ms");

        Ok(ScaleInfo { min, max, scale })
    }

    /// The x position of the instant
    pub fn project(&self, instant: Instant, scale_info: &ScaleInfo) -> f64 {
        self.left_margin + (instant.millis() as f64 - scale_info.min.millis() as f64) * scale_info.scale
    }

    /// The instant at the x position (to the nearest millisecond)
    pub fn unproject(&self, x: f64, scale_info: &ScaleInfo) -> Instant {
        let offset = ((x - self.left_margin) / scale_info.scale).round();
        Instant::from_millis(scale_info.min.millis().saturating_add(offset as i64))
    }
}
