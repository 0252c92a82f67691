// ABOUTME: Generated training plan and plan type tag
// ABOUTME: The single persisted value the engine transforms and returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::run::ScheduledRun;
use super::week::WeekWindow;
use crate::constants::schedule::{DEFAULT_PLAN_WEEKS, HALF_MARATHON_PLAN_WEEKS};
use crate::errors::AppError;

/// Goal a plan was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Build a consistent running habit
    StartRunning,
    /// Prepare for a 5K
    FiveK,
    /// Prepare for a 10K
    TenK,
    /// Prepare for a half marathon
    HalfMarathon,
    /// Heart-rate capped aerobic base block
    AerobicBase,
}

impl PlanType {
    /// Length of the onboarding plan in weeks
    #[must_use]
    pub const fn duration_weeks(self) -> u32 {
        match self {
            Self::HalfMarathon => HALF_MARATHON_PLAN_WEEKS,
            Self::StartRunning | Self::FiveK | Self::TenK | Self::AerobicBase => {
                DEFAULT_PLAN_WEEKS
            }
        }
    }

    /// Stable identifier, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartRunning => "start_running",
            Self::FiveK => "five_k",
            Self::TenK => "ten_k",
            Self::HalfMarathon => "half_marathon",
            Self::AerobicBase => "aerobic_base",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "start_running" => Ok(Self::StartRunning),
            "five_k" | "5k" => Ok(Self::FiveK),
            "ten_k" | "10k" => Ok(Self::TenK),
            "half_marathon" | "half" => Ok(Self::HalfMarathon),
            "aerobic_base" | "maf" => Ok(Self::AerobicBase),
            other => Err(AppError::invalid_input(format!(
                "Unknown plan type: {other}. Valid options: start_running, five_k, ten_k, half_marathon, aerobic_base"
            ))),
        }
    }
}

/// A plan-type tag plus its runs ordered by date
///
/// Engine operations never edit a plan in place; they return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Goal the plan was generated for
    pub plan_type: PlanType,
    /// Runs sorted ascending by date
    pub runs: Vec<ScheduledRun>,
}

impl GeneratedPlan {
    /// Build a plan, sorting runs by date
    #[must_use]
    pub fn new(plan_type: PlanType, mut runs: Vec<ScheduledRun>) -> Self {
        runs.sort_by_key(|run| run.date);
        Self { plan_type, runs }
    }

    /// Plan of the same type with a replacement run collection
    #[must_use]
    pub fn with_runs(&self, runs: Vec<ScheduledRun>) -> Self {
        Self::new(self.plan_type, runs)
    }

    /// Week of the earliest run
    #[must_use]
    pub fn start_week(&self) -> Option<WeekWindow> {
        self.runs
            .iter()
            .map(|run| run.date)
            .min()
            .map(WeekWindow::containing)
    }

    /// Runs dated inside `week`
    pub fn runs_in(&self, week: WeekWindow) -> impl Iterator<Item = &ScheduledRun> {
        self.runs.iter().filter(move |run| week.contains(run.date))
    }

    /// Run with the given identity
    #[must_use]
    pub fn find_run(&self, id: Uuid) -> Option<&ScheduledRun> {
        self.runs.iter().find(|run| run.id == id)
    }
}
