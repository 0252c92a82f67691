// ABOUTME: Run templates, scheduled runs, run status, and recorded run metrics
// ABOUTME: The calendar-dated session types that make up a generated training plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::heart_rate::{ZONE1_UPPER, ZONE2_UPPER, ZONE3_UPPER, ZONE4_UPPER};
use crate::errors::{AppError, AppResult};

/// Closed set of workout kinds a template can prescribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Conversational, low-intensity run
    Easy,
    /// Extended endurance run
    Long,
    /// Sustained comfortably-hard effort
    Tempo,
    /// Repeated hard efforts with recoveries
    Intervals,
    /// Very easy shakeout run
    Recovery,
    /// Heart-rate capped aerobic development run
    AerobicFocus,
}

/// Physiological quality a template develops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    /// Aerobic base building
    AerobicBase,
    /// Endurance and time on feet
    Endurance,
    /// Lactate threshold
    Threshold,
    /// Speed and VO2max
    Speed,
    /// Active recovery
    Recovery,
}

/// Five-zone heart rate model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZone {
    /// Zone 1: below 60% of max HR
    Zone1,
    /// Zone 2: 60-70% of max HR, the aerobic zone
    Zone2,
    /// Zone 3: 70-80% of max HR
    Zone3,
    /// Zone 4: 80-90% of max HR
    Zone4,
    /// Zone 5: 90% of max HR and above
    Zone5,
}

impl HeartRateZone {
    /// Zone number, 1 through 5
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Zone1 => 1,
            Self::Zone2 => 2,
            Self::Zone3 => 3,
            Self::Zone4 => 4,
            Self::Zone5 => 5,
        }
    }

    /// Build a zone from its number
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when `number` is outside 1..=5
    pub fn from_number(number: u8) -> AppResult<Self> {
        match number {
            1 => Ok(Self::Zone1),
            2 => Ok(Self::Zone2),
            3 => Ok(Self::Zone3),
            4 => Ok(Self::Zone4),
            5 => Ok(Self::Zone5),
            other => Err(AppError::invalid_input(format!(
                "Heart rate zone must be between 1 and 5, got {other}"
            ))),
        }
    }

    /// Classify a heart rate against a maximum heart rate
    #[must_use]
    pub fn from_heart_rate(heart_rate: f64, max_heart_rate: f64) -> Self {
        let fraction = if max_heart_rate > 0.0 {
            heart_rate / max_heart_rate
        } else {
            0.0
        };

        if fraction < ZONE1_UPPER {
            Self::Zone1
        } else if fraction < ZONE2_UPPER {
            Self::Zone2
        } else if fraction < ZONE3_UPPER {
            Self::Zone3
        } else if fraction < ZONE4_UPPER {
            Self::Zone4
        } else {
            Self::Zone5
        }
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z{}", self.number())
    }
}

/// Immutable session blueprint produced by the schedulers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTemplate {
    /// Display name
    pub name: String,
    /// Workout kind
    pub kind: WorkoutKind,
    /// Training focus
    pub focus: TrainingFocus,
    /// Target duration in seconds
    pub target_duration_seconds: Option<u32>,
    /// Target distance in kilometers
    pub target_distance_km: Option<f64>,
    /// Target heart rate zone
    pub target_zone: Option<HeartRateZone>,
    /// Free-text coaching notes
    #[serde(default)]
    pub notes: String,
}

impl RunTemplate {
    /// Prescribed duration in whole minutes, 0 when the template has none
    #[must_use]
    pub fn target_minutes(&self) -> u32 {
        self.target_duration_seconds.unwrap_or(0) / 60
    }
}

/// Lifecycle of a scheduled run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Not started yet
    #[default]
    Planned,
    /// Currently being tracked
    InProgress,
    /// Finished
    Completed,
    /// Deliberately not performed
    Skipped,
}

impl RunStatus {
    /// Runs in any status other than `Planned` carry history and must never be replaced
    #[must_use]
    pub const fn is_locked(self) -> bool {
        !matches!(self, Self::Planned)
    }
}

/// Metrics recorded by the run-tracking subsystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActualMetrics {
    /// Elapsed time in seconds
    pub elapsed_seconds: Option<u32>,
    /// Distance in kilometers
    pub distance_km: Option<f64>,
    /// Average pace in seconds per kilometer
    pub avg_pace_sec_per_km: Option<f64>,
    /// Average heart rate in bpm
    pub avg_heart_rate: Option<u32>,
    /// Seconds spent in each heart rate zone
    #[serde(default)]
    pub zone_seconds: BTreeMap<HeartRateZone, u32>,
}

impl ActualMetrics {
    /// Elapsed seconds when strictly positive
    #[must_use]
    pub fn positive_elapsed_seconds(&self) -> Option<u32> {
        self.elapsed_seconds.filter(|&seconds| seconds > 0)
    }

    /// Distance when strictly positive and finite
    #[must_use]
    pub fn positive_distance_km(&self) -> Option<f64> {
        self.distance_km
            .filter(|&distance| distance.is_finite() && distance > 0.0)
    }

    /// Fraction of elapsed time spent in zone 2
    ///
    /// `None` without a zone breakdown or a positive elapsed time.
    #[must_use]
    pub fn aerobic_share(&self) -> Option<f64> {
        if self.zone_seconds.is_empty() {
            return None;
        }
        let elapsed = self.positive_elapsed_seconds()?;
        let zone2 = self
            .zone_seconds
            .get(&HeartRateZone::Zone2)
            .copied()
            .unwrap_or(0);
        Some((f64::from(zone2) / f64::from(elapsed)).min(1.0))
    }
}

/// A calendar-dated instance of a [`RunTemplate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRun {
    /// Stable identity, kept across reschedules
    pub id: Uuid,
    /// Calendar day of the run
    pub date: NaiveDate,
    /// Prescribed workout
    pub template: RunTemplate,
    /// Lifecycle status
    #[serde(default)]
    pub status: RunStatus,
    /// Recorded metrics, present once the run has been tracked
    #[serde(default)]
    pub actual: Option<ActualMetrics>,
}

impl ScheduledRun {
    /// Create a new planned run with a fresh identity
    #[must_use]
    pub fn planned(date: NaiveDate, template: RunTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            template,
            status: RunStatus::Planned,
            actual: None,
        }
    }

    /// Same run moved to another day, identity preserved
    #[must_use]
    pub fn rescheduled_to(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Whether this run has been completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Duration used for load: actual elapsed time, else the template target
    #[must_use]
    pub fn effective_duration_seconds(&self) -> u32 {
        self.actual
            .as_ref()
            .and_then(ActualMetrics::positive_elapsed_seconds)
            .or(self.template.target_duration_seconds)
            .unwrap_or(0)
    }

    /// Recorded average heart rate, if any
    #[must_use]
    pub fn avg_heart_rate(&self) -> Option<u32> {
        self.actual.as_ref().and_then(|actual| actual.avg_heart_rate)
    }
}
