// ABOUTME: Athlete onboarding profile with sex, age, schedule, and personal best
// ABOUTME: Resolves the max heart rate used for training load and zone classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::trimp::DEFAULT_MAX_HEART_RATE;
use crate::errors::AppError;
use crate::intelligence::MaxHrAlgorithm;

/// Biological sex, selects the Bannister TRIMP coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficients (0.64, 1.92)
    #[default]
    Male,
    /// Female coefficients (0.86, 1.67)
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: {other}. Valid options: male, female"
            ))),
        }
    }
}

/// Best recorded performance reported during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalBest {
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Finishing time in seconds
    pub time_seconds: u32,
}

/// Answers collected during onboarding
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnboardingProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    #[serde(default)]
    pub sex: Sex,
    /// Weekdays the runner wants to train on
    #[serde(default)]
    pub selected_days: Vec<Weekday>,
    /// Personal best, if reported
    pub personal_best: Option<PersonalBest>,
    /// Measured max heart rate, overrides any estimate
    pub max_heart_rate: Option<u32>,
}

impl OnboardingProfile {
    /// Max heart rate: the measured value, else an age estimate, else 190 bpm
    #[must_use]
    pub fn effective_max_heart_rate(&self, algorithm: MaxHrAlgorithm) -> f64 {
        if let Some(measured) = self.max_heart_rate.filter(|&hr| hr > 0) {
            return f64::from(measured);
        }
        self.age
            .and_then(|age| algorithm.estimate(age, Some(self.sex)).ok())
            .unwrap_or_else(|| f64::from(DEFAULT_MAX_HEART_RATE))
    }
}
