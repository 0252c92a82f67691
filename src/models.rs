// ABOUTME: Plan data model re-exported from the stride-core foundation crate
// ABOUTME: Runs, templates, plans, week windows, and athlete onboarding profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! # Data Models
//!
//! See [`stride_core::models`] for the type definitions.

pub use stride_core::models::{
    monday_floor, normalize_weekdays, ActualMetrics, GeneratedPlan, HeartRateZone,
    OnboardingProfile, PersonalBest, PlanType, RunStatus, RunTemplate, ScheduledRun, Sex,
    TrainingFocus, WeekWindow, WorkoutKind,
};
