// ABOUTME: Monday-floored week windows and weekday normalization helpers
// ABOUTME: Groups runs for load totals and bounds regeneration and adaptation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::schedule::DAYS_PER_WEEK;

/// Half-open 7-day window `[start, start + 7)` starting on a Monday
///
/// Weeks always start on Monday regardless of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// Window containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        Self {
            start: date - Duration::days(offset),
        }
    }

    /// First day (a Monday)
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day after the window
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_PER_WEEK)
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    /// The following week
    #[must_use]
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// The preceding week
    #[must_use]
    pub fn previous(&self) -> Self {
        self.offset(-1)
    }

    /// Window shifted by a number of weeks
    #[must_use]
    pub fn offset(&self, weeks: i64) -> Self {
        Self {
            start: self.start + Duration::days(weeks * DAYS_PER_WEEK),
        }
    }
}

/// Monday-floor of a date
#[must_use]
pub fn monday_floor(date: NaiveDate) -> NaiveDate {
    WeekWindow::containing(date).start()
}

/// Sort weekdays Monday-first and drop duplicates
#[must_use]
pub fn normalize_weekdays(days: &[Weekday]) -> Vec<Weekday> {
    let mut normalized = days.to_vec();
    normalized.sort_by_key(Weekday::num_days_from_monday);
    normalized.dedup();
    normalized
}
