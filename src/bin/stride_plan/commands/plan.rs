// ABOUTME: Plan lifecycle commands for stride-plan
// ABOUTME: Loads the stored plan, runs one engine operation, and saves the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use chrono::{NaiveDate, Weekday};
use stride_engine::constants::schedule::MAX_RUNS_PER_WEEK;
use stride_engine::errors::{AppError, AppResult};
use stride_engine::intelligence::{PaceAdvisor, PlanRegenerator};
use stride_engine::models::{GeneratedPlan, OnboardingProfile, PlanType, Sex};
use stride_engine::plan_store::PlanStore;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display;

/// Athlete details supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct AthleteArgs {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    /// Measured max heart rate override
    pub max_heart_rate: Option<u32>,
}

impl AthleteArgs {
    /// Onboarding profile built from the supplied flags, `None` when no flag was given
    fn profile(&self, selected_days: &[Weekday]) -> Option<OnboardingProfile> {
        if self.age.is_none() && self.sex.is_none() && self.max_heart_rate.is_none() {
            return None;
        }
        Some(OnboardingProfile {
            age: self.age,
            sex: self.sex.unwrap_or_default(),
            selected_days: selected_days.to_vec(),
            personal_best: None,
            max_heart_rate: self.max_heart_rate,
        })
    }
}

fn load_existing(store: &impl PlanStore) -> AppResult<GeneratedPlan> {
    store
        .load()?
        .ok_or_else(|| AppError::not_found("Training plan (run `stride-plan init` first)"))
}

/// Runs per week must be between 1 and 7
fn validate_frequency(frequency: u32) -> AppResult<()> {
    if frequency == 0 || frequency > MAX_RUNS_PER_WEEK {
        return Err(AppError::invalid_input(format!(
            "Frequency must be between 1 and {MAX_RUNS_PER_WEEK} runs per week, got {frequency}"
        )));
    }
    Ok(())
}

/// Create and store an onboarding plan
pub fn init(
    store: &impl PlanStore,
    plan_type: PlanType,
    frequency: u32,
    days: &[Weekday],
    start: NaiveDate,
) -> AppResult<()> {
    validate_frequency(frequency)?;
    let plan = PlanRegenerator::new().generate_initial_plan(plan_type, frequency, start, days);
    store.save(&plan)?;
    info!(%plan_type, runs = plan.runs.len(), "Stored new plan");
    display::print_plan_summary(&plan);
    Ok(())
}

/// Regenerate future weeks for new training days
pub fn reschedule(store: &impl PlanStore, days: &[Weekday], today: NaiveDate) -> AppResult<()> {
    let plan = load_existing(store)?;
    let regenerated = PlanRegenerator::new().regenerate_future(&plan, days, today);
    store.save(&regenerated)?;
    display::print_plan_summary(&regenerated);
    Ok(())
}

/// Apply the weekly load adaptation
pub fn adapt(
    store: &impl PlanStore,
    days: &[Weekday],
    today: NaiveDate,
    athlete: &AthleteArgs,
) -> AppResult<()> {
    let plan = load_existing(store)?;
    let profile = athlete.profile(days).unwrap_or_else(|| OnboardingProfile {
        selected_days: days.to_vec(),
        ..OnboardingProfile::default()
    });
    let outcome = PlanRegenerator::new().apply_weekly_adaptation(&plan, days, today, &profile);
    if outcome.is_applied() {
        store.save(&outcome.plan)?;
    }
    display::print_adaptation(&outcome);
    Ok(())
}

/// Move one planned run
pub fn move_run(
    store: &impl PlanStore,
    run_id: Uuid,
    to: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    let plan = load_existing(store)?;
    let moved = PlanRegenerator::new().reschedule_run(&plan, run_id, to, today);
    if moved == plan {
        println!("Run {run_id} was not moved (unknown id, not planned, or date in the past)");
        return Ok(());
    }
    store.save(&moved)?;
    println!("Moved run {run_id} to {to}");
    Ok(())
}

/// Print the recommended easy pace
pub fn pace(store: &impl PlanStore, today: NaiveDate, athlete: &AthleteArgs) -> AppResult<()> {
    let plan = load_existing(store)?;
    let profile = athlete.profile(&[]);
    let pace = PaceAdvisor::new().recommend_pace(today, &plan.runs, profile.as_ref());
    println!("Recommended easy pace: {pace}");
    Ok(())
}

/// Print the stored plan as JSON
pub fn show(store: &impl PlanStore) -> AppResult<()> {
    let plan = load_existing(store)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
