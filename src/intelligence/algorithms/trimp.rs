// ABOUTME: Training Impulse (TRIMP) calculation with sex-specific Bannister coefficients
// ABOUTME: Scores one session's duration and heart rate intensity, and sums load over sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use serde::{Deserialize, Serialize};
use stride_core::constants::trimp::{FEMALE_COEFFICIENTS, MALE_COEFFICIENTS};
use stride_core::models::{ScheduledRun, Sex};
use tracing::debug;

use crate::config::{EngineConfig, LoadModelConfig};

/// Bannister exponential coefficients `(k1, k2)`
///
/// # Scientific References
///
/// - Bannister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BannisterCoefficients {
    /// Intensity weighting exponent
    pub k1: f64,
    /// Normalizing exponent
    pub k2: f64,
}

impl BannisterCoefficients {
    /// Coefficients for the given sex: male (0.64, 1.92), female (0.86, 1.67)
    #[must_use]
    pub const fn for_sex(sex: Sex) -> Self {
        let (k1, k2) = match sex {
            Sex::Male => MALE_COEFFICIENTS,
            Sex::Female => FEMALE_COEFFICIENTS,
        };
        Self { k1, k2 }
    }
}

/// Converts session duration and heart rate intensity into a scalar training load
///
/// Formula: `minutes x (e^(k1 x ratio) - 1) / (e^(k2) - 1)`, floored at 0,
/// where `ratio = avg_hr / max_hr` clamped to `[0, max_intensity_ratio]`.
/// Sessions without heart rate data use the configured default ratio (0.65).
#[derive(Debug, Clone)]
pub struct TrainingLoadModel {
    config: LoadModelConfig,
}

impl Default for TrainingLoadModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadModel {
    /// Create a model from the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().load.clone())
    }

    /// Create a model with explicit configuration
    #[must_use]
    pub const fn with_config(config: LoadModelConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &LoadModelConfig {
        &self.config
    }

    /// Intensity ratio for a session
    ///
    /// `avg_hr / max_hr` clamped to `[0, max_intensity_ratio]`, or the default
    /// ratio when the heart rate is missing.
    #[must_use]
    pub fn intensity_ratio(&self, avg_heart_rate: Option<f64>, max_heart_rate: f64) -> f64 {
        avg_heart_rate.map_or(self.config.default_intensity_ratio, |avg_hr| {
            (avg_hr / max_heart_rate).clamp(0.0, self.config.max_intensity_ratio)
        })
    }

    /// Training load of a single session
    ///
    /// Returns 0 when `duration_seconds <= 0` or `max_heart_rate <= 0`.
    #[must_use]
    pub fn session_load(
        &self,
        duration_seconds: f64,
        avg_heart_rate: Option<f64>,
        max_heart_rate: f64,
        sex: Sex,
    ) -> f64 {
        if duration_seconds <= 0.0 || max_heart_rate <= 0.0 {
            return 0.0;
        }

        let BannisterCoefficients { k1, k2 } = BannisterCoefficients::for_sex(sex);
        let ratio = self.intensity_ratio(avg_heart_rate, max_heart_rate);
        let minutes = duration_seconds / 60.0;

        let load = minutes * (k1 * ratio).exp_m1() / k2.exp_m1();
        load.max(0.0)
    }

    /// Sum of session loads over runs
    ///
    /// Each run contributes its actual elapsed time and heart rate when recorded,
    /// else its template target duration at the default intensity. Callers filter
    /// to completed runs before using the total for trend analysis.
    #[must_use]
    pub fn total_load<'a, I>(&self, runs: I, max_heart_rate: f64, sex: Sex) -> f64
    where
        I: IntoIterator<Item = &'a ScheduledRun>,
    {
        let mut sessions = 0_usize;
        let total: f64 = runs
            .into_iter()
            .map(|run| {
                sessions += 1;
                self.session_load(
                    f64::from(run.effective_duration_seconds()),
                    run.avg_heart_rate().map(f64::from),
                    max_heart_rate,
                    sex,
                )
            })
            .sum();

        debug!(sessions, total, max_heart_rate, %sex, "Computed total training load");
        total
    }
}
