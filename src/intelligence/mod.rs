// ABOUTME: Training intelligence for adaptive plans: load scoring, adaptation, scheduling, pace
// ABOUTME: Groups the engine components that turn run history into the next weeks of training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! # Intelligence Module
//!
//! Components, leaf first:
//!
//! - [`TrainingLoadModel`]: per-session TRIMP and weekly totals
//! - [`WeeklyScheduler`]: one week of uniform zone-2 sessions
//! - [`LoadAdaptationPolicy`]: load trend and next-week minutes
//! - [`PlanRegenerator`]: initial plan, regeneration, adaptation, reschedule
//! - [`PaceAdvisor`]: recommended easy pace

/// Load scoring algorithms
pub mod algorithms;
/// Trend classification and progressive overload
pub mod load_adaptation;
/// Easy pace recommendation
pub mod pace_advisor;
/// Plan creation and history-preserving merges
pub mod plan_regenerator;
/// Onboarding template lists per plan type
pub mod templates;
/// Uniform weekly session builder
pub mod weekly_scheduler;

pub use algorithms::{MaxHrAlgorithm, TrainingLoadModel};
pub use load_adaptation::{LoadAdaptationPolicy, LoadTrend};
pub use pace_advisor::{format_pace, PaceAdvisor};
pub use plan_regenerator::{
    AdaptationDecision, AdaptationOutcome, PlanRegenerator, SkipReason, WeeklyPerformance,
};
pub use templates::templates_for;
pub use weekly_scheduler::WeeklyScheduler;
