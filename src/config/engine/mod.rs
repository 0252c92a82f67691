// ABOUTME: Engine configuration container for training load, adaptation, schedule, and pace
// ABOUTME: Loads defaults, applies STRIDE_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `load` - TRIMP intensity defaults and max HR formula
//! - `adaptation` - trend thresholds, overload factor, seed volume, growth cap
//! - `schedule` - plan horizon and regeneration volume
//! - `pace` - pace advisor thresholds and buffers
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export STRIDE_SEED_WEEKLY_MINUTES=180
//!    export STRIDE_MAX_HR_ALGORITHM=fox
//!    ```
//!
//! 2. Default values (if env vars not set)

pub mod adaptation;
pub mod error;
pub mod load;
pub mod pace;
pub mod schedule;

pub use adaptation::AdaptationConfig;
pub use error::ConfigError;
pub use load::LoadModelConfig;
pub use pace::PaceConfig;
pub use schedule::ScheduleConfig;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// TRIMP training load model
    pub load: LoadModelConfig,
    /// Week-over-week load adaptation policy
    pub adaptation: AdaptationConfig,
    /// Plan calendar horizon and regeneration volume
    pub schedule: ScheduleConfig,
    /// Pace advisor
    pub pace: PaceConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds are out of order or values are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_load()?;
        self.validate_adaptation()?;
        self.validate_schedule()?;
        self.validate_pace()
    }

    fn validate_load(&self) -> Result<(), ConfigError> {
        let load = &self.load;
        if load.max_intensity_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Max intensity ratio must be positive",
            ));
        }
        if !(0.0..=load.max_intensity_ratio).contains(&load.default_intensity_ratio) {
            return Err(ConfigError::InvalidRange(
                "Default intensity ratio must be between 0 and the max intensity ratio",
            ));
        }
        Ok(())
    }

    fn validate_adaptation(&self) -> Result<(), ConfigError> {
        let policy = &self.adaptation;
        if policy.seed_weekly_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Seed weekly minutes must be at least 1",
            ));
        }
        if !(policy.undertrained_ratio > 0.0
            && policy.undertrained_ratio <= policy.progress_lower_ratio
            && policy.progress_lower_ratio <= policy.progress_upper_ratio
            && policy.progress_upper_ratio <= policy.overreached_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "Trend thresholds must satisfy 0 < undertrained <= progress lower <= progress upper <= overreached",
            ));
        }
        if policy.growth_cap < 1.0 {
            return Err(ConfigError::ValueOutOfRange("Growth cap must be at least 1.0"));
        }
        if !(1.0..=policy.growth_cap).contains(&policy.progress_overload_factor) {
            return Err(ConfigError::InvalidRange(
                "Progress overload factor must be between 1.0 and the growth cap",
            ));
        }
        Ok(())
    }

    fn validate_schedule(&self) -> Result<(), ConfigError> {
        if self.schedule.horizon_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Plan horizon must be at least 1 week",
            ));
        }
        Ok(())
    }

    fn validate_pace(&self) -> Result<(), ConfigError> {
        let pace = &self.pace;
        let share_ok = |share: f64| share > 0.0 && share <= 1.0;
        if !share_ok(pace.aerobic_share_threshold) || !share_ok(pace.low_aerobic_share_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Aerobic share thresholds must be in (0, 1]",
            ));
        }
        if pace.sample_size == 0 {
            return Err(ConfigError::ValueOutOfRange("Pace sample size must be at least 1"));
        }
        if pace.fallback_pace_seconds <= 0.0
            || pace.safety_buffer_seconds < 0.0
            || pace.low_aerobic_penalty_seconds < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Pace buffers must be non-negative and the fallback pace positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Training load overrides
        Self::apply_env_var(
            "STRIDE_TRIMP_DEFAULT_INTENSITY",
            &mut self.load.default_intensity_ratio,
        )?;
        Self::apply_env_var(
            "STRIDE_TRIMP_MAX_INTENSITY",
            &mut self.load.max_intensity_ratio,
        )?;
        Self::apply_env_var("STRIDE_MAX_HR_ALGORITHM", &mut self.load.max_hr_algorithm)?;

        // Adaptation overrides
        Self::apply_env_var(
            "STRIDE_SEED_WEEKLY_MINUTES",
            &mut self.adaptation.seed_weekly_minutes,
        )?;
        Self::apply_env_var(
            "STRIDE_PROGRESS_FACTOR",
            &mut self.adaptation.progress_overload_factor,
        )?;
        Self::apply_env_var("STRIDE_GROWTH_CAP", &mut self.adaptation.growth_cap)?;

        // Schedule overrides
        Self::apply_env_var(
            "STRIDE_PLAN_HORIZON_WEEKS",
            &mut self.schedule.horizon_weeks,
        )?;
        Self::apply_env_var(
            "STRIDE_REGENERATION_WEEKLY_MINUTES",
            &mut self.schedule.regeneration_weekly_minutes,
        )?;

        // Pace overrides
        Self::apply_env_var(
            "STRIDE_AEROBIC_SHARE_THRESHOLD",
            &mut self.pace.aerobic_share_threshold,
        )?;
        Self::apply_env_var("STRIDE_PACE_SAMPLE_SIZE", &mut self.pace.sample_size)?;
        Self::apply_env_var(
            "STRIDE_PACE_BUFFER_SECONDS",
            &mut self.pace.safety_buffer_seconds,
        )?;
        Self::apply_env_var(
            "STRIDE_LOW_AEROBIC_PENALTY_SECONDS",
            &mut self.pace.low_aerobic_penalty_seconds,
        )?;
        Self::apply_env_var(
            "STRIDE_FALLBACK_PACE_SECONDS",
            &mut self.pace.fallback_pace_seconds,
        )?;

        Ok(self)
    }
}
