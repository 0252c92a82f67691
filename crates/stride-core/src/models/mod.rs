// ABOUTME: Core data models for the adaptive training plan engine
// ABOUTME: Re-exports run, plan, week window, and athlete profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! # Data Models
//!
//! - `RunTemplate`: immutable session blueprint created by the schedulers
//! - `ScheduledRun`: a dated template instance with status and recorded metrics
//! - `GeneratedPlan`: plan-type tag plus date-ordered runs, the persisted value
//! - `WeekWindow`: Monday-floored 7-day interval used to group runs
//! - `OnboardingProfile`: athlete answers feeding max heart rate and sex
//!
//! ## Design Principles
//!
//! - **Serializable**: every field round-trips through JSON losslessly
//! - **History is immutable**: runs that are not `Planned` are never rewritten by the engine

mod athlete;
mod plan;
mod run;
mod week;

pub use athlete::{OnboardingProfile, PersonalBest, Sex};
pub use plan::{GeneratedPlan, PlanType};
pub use run::{
    ActualMetrics, HeartRateZone, RunStatus, RunTemplate, ScheduledRun, TrainingFocus,
    WorkoutKind,
};
pub use week::{monday_floor, normalize_weekdays, WeekWindow};
