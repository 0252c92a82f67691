// ABOUTME: Creates, regenerates, adapts, and reschedules training plans without touching history
// ABOUTME: Merges freshly built weeks into existing plans through explicitly tagged merge slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! Plan regeneration
//!
//! Every operation is a pure transform from one [`GeneratedPlan`] to another.
//! Runs dated before `today` and runs whose status is not `Planned` are never
//! rewritten. Missing preconditions return the plan unchanged instead of an error.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use stride_core::constants::schedule::MAX_RUNS_PER_WEEK;
use stride_core::models::{
    monday_floor, normalize_weekdays, GeneratedPlan, OnboardingProfile, PlanType, ScheduledRun,
    WeekWindow,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::algorithms::TrainingLoadModel;
use super::load_adaptation::{LoadAdaptationPolicy, LoadTrend};
use super::templates::templates_for;
use super::weekly_scheduler::WeeklyScheduler;
use crate::config::{EngineConfig, ScheduleConfig};

/// Completed load and minutes of one week compared with the week before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPerformance {
    /// Monday of the evaluated week
    pub week_start: NaiveDate,
    /// Trend of this week's load against the previous week
    pub trend: LoadTrend,
    /// Minutes of completed runs in the evaluated week
    pub completed_minutes: u32,
    /// TRIMP load of completed runs in the evaluated week
    pub completed_load: f64,
    /// Minutes of completed runs in the previous week
    pub previous_completed_minutes: u32,
    /// TRIMP load of completed runs in the previous week
    pub previous_load: f64,
}

/// Why a weekly adaptation left the plan unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No training weekday selected
    NoSelectedDays,
    /// The week being closed has no scheduled runs
    ClosingWeekEmpty,
    /// The last run of the week being closed is not completed
    ClosingWeekIncomplete,
    /// The replacement week lies beyond the plan horizon
    HorizonExceeded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoSelectedDays => "no training days selected",
            Self::ClosingWeekEmpty => "last week has no scheduled runs",
            Self::ClosingWeekIncomplete => "last run of last week is not completed",
            Self::HorizonExceeded => "plan horizon reached",
        };
        f.write_str(text)
    }
}

/// What a weekly adaptation did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdaptationDecision {
    /// The current week was rebuilt with a new minute budget
    Applied {
        /// Performance of the closed week
        performance: WeeklyPerformance,
        /// Minutes prescribed for the rebuilt week
        next_week_minutes: u32,
    },
    /// The plan was returned unchanged
    Skipped {
        /// Reason for skipping
        reason: SkipReason,
    },
}

/// Result of [`PlanRegenerator::apply_weekly_adaptation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptationOutcome {
    /// The resulting plan, identical to the input when skipped
    pub plan: GeneratedPlan,
    /// Applied or skipped, with details
    pub decision: AdaptationDecision,
    /// Monday on which the next adaptation is due, if still inside the horizon
    pub next_due_on: Option<NaiveDate>,
}

impl AdaptationOutcome {
    /// Whether the plan was changed
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.decision, AdaptationDecision::Applied { .. })
    }
}

/// A run headed for the merged plan, tagged with how it got there
#[derive(Debug, Clone)]
enum MergeSlot {
    /// Existing run carried over untouched
    Kept(ScheduledRun),
    /// Existing run with a new date and the same id
    Moved(ScheduledRun),
    /// Newly built run with a fresh id
    Fresh(ScheduledRun),
}

/// Assemble a plan from tagged slots, sorted by date
fn merge(plan: &GeneratedPlan, slots: Vec<MergeSlot>) -> GeneratedPlan {
    let (mut kept, mut moved, mut fresh) = (0_usize, 0_usize, 0_usize);
    let runs = slots
        .into_iter()
        .map(|slot| match slot {
            MergeSlot::Kept(run) => {
                kept += 1;
                run
            }
            MergeSlot::Moved(run) => {
                moved += 1;
                run
            }
            MergeSlot::Fresh(run) => {
                fresh += 1;
                run
            }
        })
        .collect();

    debug!(kept, moved, fresh, "Merged plan runs");
    plan.with_runs(runs)
}

/// Builds and transforms training plans
#[derive(Debug, Clone)]
pub struct PlanRegenerator {
    load_model: TrainingLoadModel,
    policy: LoadAdaptationPolicy,
    schedule: ScheduleConfig,
}

impl Default for PlanRegenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanRegenerator {
    /// Create a regenerator from the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global())
    }

    /// Create a regenerator with explicit configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            load_model: TrainingLoadModel::with_config(config.load.clone()),
            policy: LoadAdaptationPolicy::with_config(config.adaptation.clone()),
            schedule: config.schedule.clone(),
        }
    }

    /// Build the onboarding plan
    ///
    /// Produces `frequency x plan_type.duration_weeks()` runs, one per matching
    /// weekday walking forward from the Monday of `start_date`'s week, cycling
    /// through the plan type's templates. Runs may therefore land earlier in
    /// that week than `start_date` itself. `frequency` is capped at
    /// [`MAX_RUNS_PER_WEEK`].
    #[must_use]
    pub fn generate_initial_plan(
        &self,
        plan_type: PlanType,
        frequency: u32,
        start_date: NaiveDate,
        selected_days: &[Weekday],
    ) -> GeneratedPlan {
        let days = normalize_weekdays(selected_days);
        let templates = templates_for(plan_type);
        if days.is_empty() || frequency == 0 || templates.is_empty() {
            return GeneratedPlan::new(plan_type, Vec::new());
        }

        if frequency > MAX_RUNS_PER_WEEK {
            warn!(frequency, max = MAX_RUNS_PER_WEEK, "Capping weekly run frequency");
        }
        let frequency = frequency.min(MAX_RUNS_PER_WEEK);
        let total = (frequency * plan_type.duration_weeks()) as usize;
        let mut runs = Vec::new();
        let mut date = monday_floor(start_date);
        while runs.len() < total {
            if days.contains(&date.weekday()) {
                let template = templates[runs.len() % templates.len()].clone();
                runs.push(ScheduledRun::planned(date, template));
            }
            date += Duration::days(1);
        }

        info!(%plan_type, frequency, sessions = runs.len(), %start_date, "Generated initial plan");
        GeneratedPlan::new(plan_type, runs)
    }

    /// Replace future planned runs after the athlete changes training days
    ///
    /// Keeps runs dated before `today` and every locked run. Weeks from
    /// `today`'s week up to the horizon are rebuilt with the regeneration
    /// volume; rebuilt sessions before `today` or on a date held by a kept run
    /// are dropped.
    #[must_use]
    pub fn regenerate_future(
        &self,
        plan: &GeneratedPlan,
        new_selected_days: &[Weekday],
        today: NaiveDate,
    ) -> GeneratedPlan {
        let days = normalize_weekdays(new_selected_days);
        if days.is_empty() {
            debug!("No training days selected, plan unchanged");
            return plan.clone();
        }

        let horizon_end = self.horizon_end(plan, today);
        let mut week = WeekWindow::containing(today);
        if week.start() >= horizon_end {
            debug!(%horizon_end, "Plan horizon elapsed, plan unchanged");
            return plan.clone();
        }

        let mut slots: Vec<MergeSlot> = plan
            .runs
            .iter()
            .filter(|run| run.date < today || run.status.is_locked())
            .cloned()
            .map(MergeSlot::Kept)
            .collect();
        let held: HashSet<NaiveDate> = slots
            .iter()
            .filter_map(|slot| match slot {
                MergeSlot::Kept(run) => Some(run.date),
                MergeSlot::Moved(_) | MergeSlot::Fresh(_) => None,
            })
            .collect();

        let minutes = self.schedule.regeneration_weekly_minutes;
        while week.start() < horizon_end {
            slots.extend(
                WeeklyScheduler::build_week(week.start(), &days, minutes)
                    .into_iter()
                    .filter(|run| run.date >= today && !held.contains(&run.date))
                    .map(MergeSlot::Fresh),
            );
            week = week.next();
        }

        let regenerated = merge(plan, slots);
        info!(
            %today,
            %horizon_end,
            runs = regenerated.runs.len(),
            "Regenerated future plan"
        );
        regenerated
    }

    /// Close last week and rebuild the current week from its load trend
    ///
    /// The closing week is the week before `today`'s week, and the replacement
    /// week is `today`'s week. Loads use completed runs only. The closing
    /// week's prescribed minutes feed [`LoadAdaptationPolicy::next_week_minutes`].
    /// Only the replacement week changes; its locked runs are kept and new
    /// sessions landing on their dates are dropped.
    #[must_use]
    pub fn apply_weekly_adaptation(
        &self,
        plan: &GeneratedPlan,
        selected_days: &[Weekday],
        today: NaiveDate,
        profile: &OnboardingProfile,
    ) -> AdaptationOutcome {
        let replacement = WeekWindow::containing(today);
        let closing = replacement.previous();
        let horizon_end = self.horizon_end(plan, today);
        let next_due_on = Some(replacement.next().start()).filter(|due| *due < horizon_end);

        let skipped = |reason: SkipReason| {
            debug!(%reason, %today, "Weekly adaptation skipped");
            AdaptationOutcome {
                plan: plan.clone(),
                decision: AdaptationDecision::Skipped { reason },
                next_due_on,
            }
        };

        let days = normalize_weekdays(selected_days);
        if days.is_empty() {
            return skipped(SkipReason::NoSelectedDays);
        }
        let Some(last_closing_run) = plan.runs_in(closing).max_by_key(|run| run.date) else {
            return skipped(SkipReason::ClosingWeekEmpty);
        };
        if !last_closing_run.is_completed() {
            return skipped(SkipReason::ClosingWeekIncomplete);
        }
        if replacement.start() >= horizon_end {
            return skipped(SkipReason::HorizonExceeded);
        }

        let performance = self.weekly_performance(plan, closing, profile);
        let prescribed_seconds: u32 = plan
            .runs_in(closing)
            .filter_map(|run| run.template.target_duration_seconds)
            .sum();
        let next_week_minutes = self.policy.next_week_minutes(
            performance.previous_load,
            performance.completed_load,
            prescribed_seconds / 60,
        );

        let locked_dates: HashSet<NaiveDate> = plan
            .runs_in(replacement)
            .filter(|run| run.status.is_locked())
            .map(|run| run.date)
            .collect();
        let mut slots: Vec<MergeSlot> = plan
            .runs
            .iter()
            .filter(|run| !replacement.contains(run.date) || run.status.is_locked())
            .cloned()
            .map(MergeSlot::Kept)
            .collect();
        slots.extend(
            WeeklyScheduler::build_week(replacement.start(), &days, next_week_minutes)
                .into_iter()
                .filter(|run| !locked_dates.contains(&run.date))
                .map(MergeSlot::Fresh),
        );

        info!(
            trend = %performance.trend,
            completed_load = performance.completed_load,
            previous_load = performance.previous_load,
            next_week_minutes,
            week_start = %replacement.start(),
            "Applied weekly adaptation"
        );

        AdaptationOutcome {
            plan: merge(plan, slots),
            decision: AdaptationDecision::Applied {
                performance,
                next_week_minutes,
            },
            next_due_on,
        }
    }

    /// Move one planned run to a new date, keeping its id
    ///
    /// Unknown ids, locked runs, and target dates before `today` leave the
    /// plan unchanged.
    #[must_use]
    pub fn reschedule_run(
        &self,
        plan: &GeneratedPlan,
        run_id: Uuid,
        new_date: NaiveDate,
        today: NaiveDate,
    ) -> GeneratedPlan {
        let movable = plan
            .find_run(run_id)
            .is_some_and(|run| !run.status.is_locked());
        if !movable || new_date < today {
            debug!(%run_id, %new_date, %today, "Run not rescheduled");
            return plan.clone();
        }

        let slots = plan
            .runs
            .iter()
            .cloned()
            .map(|run| {
                if run.id == run_id {
                    MergeSlot::Moved(run.rescheduled_to(new_date))
                } else {
                    MergeSlot::Kept(run)
                }
            })
            .collect();

        info!(%run_id, %new_date, "Rescheduled run");
        merge(plan, slots)
    }

    /// Completed load and minutes of `week` and of the week before it
    #[must_use]
    pub fn weekly_performance(
        &self,
        plan: &GeneratedPlan,
        week: WeekWindow,
        profile: &OnboardingProfile,
    ) -> WeeklyPerformance {
        let max_heart_rate =
            profile.effective_max_heart_rate(self.load_model.config().max_hr_algorithm);
        let completed = |window: WeekWindow| -> (u32, f64) {
            let runs: Vec<&ScheduledRun> = plan
                .runs_in(window)
                .filter(|run| run.is_completed())
                .collect();
            let seconds: u32 = runs.iter().map(|run| run.effective_duration_seconds()).sum();
            let load = self
                .load_model
                .total_load(runs.iter().copied(), max_heart_rate, profile.sex);
            (seconds / 60, load)
        };

        let (completed_minutes, completed_load) = completed(week);
        let (previous_completed_minutes, previous_load) = completed(week.previous());

        WeeklyPerformance {
            week_start: week.start(),
            trend: self.policy.classify(completed_load, previous_load),
            completed_minutes,
            completed_load,
            previous_completed_minutes,
            previous_load,
        }
    }

    /// Exclusive end of the plan calendar, measured from the plan's first week
    ///
    /// A plan without runs is measured from `today`'s week.
    #[must_use]
    pub fn horizon_end(&self, plan: &GeneratedPlan, today: NaiveDate) -> NaiveDate {
        let first_week = plan
            .start_week()
            .unwrap_or_else(|| WeekWindow::containing(today));
        first_week
            .offset(i64::from(self.schedule.horizon_weeks))
            .start()
    }
}
