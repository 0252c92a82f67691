// ABOUTME: Builds one calendar week of uniform zone-2 sessions from a minute budget
// ABOUTME: Splits minutes evenly over selected weekdays with the remainder on the last day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use stride_core::constants::schedule::DAYS_PER_WEEK;
use stride_core::models::{
    normalize_weekdays, HeartRateZone, RunTemplate, ScheduledRun, TrainingFocus, WorkoutKind,
};
use tracing::debug;

/// Name of the template used for every adaptive week session
pub const EASY_AEROBIC_RUN: &str = "Easy Aerobic Run";

/// Stateless builder for adaptive training weeks
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyScheduler;

impl WeeklyScheduler {
    /// Uniform zone-2 easy template lasting `minutes`
    #[must_use]
    pub fn easy_aerobic_template(minutes: u32) -> RunTemplate {
        RunTemplate {
            name: EASY_AEROBIC_RUN.to_owned(),
            kind: WorkoutKind::Easy,
            focus: TrainingFocus::AerobicBase,
            target_duration_seconds: Some(minutes.saturating_mul(60)),
            target_distance_km: None,
            target_zone: Some(HeartRateZone::Zone2),
            notes: String::new(),
        }
    }

    /// Build one week of sessions starting at `week_start`
    ///
    /// Each selected weekday receives `total_minutes / n` minutes and the last
    /// weekday in Monday-first order also receives the remainder, so the
    /// allotted minutes always sum to `total_minutes`. Dates are found by
    /// walking forward from `week_start` within seven days. Returns an empty
    /// list when no weekday is selected.
    #[must_use]
    pub fn build_week(
        week_start: NaiveDate,
        selected_weekdays: &[Weekday],
        total_minutes: u32,
    ) -> Vec<ScheduledRun> {
        let days = normalize_weekdays(selected_weekdays);
        let Some(count) = u32::try_from(days.len()).ok().filter(|&n| n > 0) else {
            return Vec::new();
        };

        let base = total_minutes / count;
        let remainder = total_minutes % count;
        let last_index = days.len() - 1;

        let mut runs: Vec<ScheduledRun> = days
            .iter()
            .enumerate()
            .filter_map(|(index, &weekday)| {
                let minutes = if index == last_index {
                    base + remainder
                } else {
                    base
                };
                date_in_week(week_start, weekday).map(|date| {
                    ScheduledRun::planned(date, Self::easy_aerobic_template(minutes))
                })
            })
            .collect();
        runs.sort_by_key(|run| run.date);

        debug!(
            %week_start,
            sessions = runs.len(),
            total_minutes,
            "Built adaptive training week"
        );
        runs
    }
}

/// First date on or after `week_start`, within seven days, falling on `weekday`
fn date_in_week(week_start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    (0..DAYS_PER_WEEK)
        .map(|offset| week_start + Duration::days(offset))
        .find(|date| date.weekday() == weekday)
}
