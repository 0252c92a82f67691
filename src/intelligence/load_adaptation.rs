// ABOUTME: Week-over-week training load trend classification and next-week volume policy
// ABOUTME: Applies progressive overload on good progress under a hard +10% growth ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AdaptationConfig, EngineConfig};

/// Display trend comparing this week's load to last week's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTrend {
    /// Load dropped below 90% of last week
    Undertrained,
    /// Neither a clear drop, progression, nor overreach
    Maintain,
    /// Load between 100% and 110% of last week
    GoodProgress,
    /// Load above 120% of last week
    Overreached,
}

impl LoadTrend {
    /// Volume multiplier applied for this trend
    ///
    /// Only `GoodProgress` grows volume; every other trend repeats last week.
    #[must_use]
    pub fn overload_factor(self, config: &AdaptationConfig) -> f64 {
        match self {
            Self::GoodProgress => config.progress_overload_factor,
            Self::Undertrained | Self::Maintain | Self::Overreached => 1.0,
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undertrained => "undertrained",
            Self::Maintain => "maintain",
            Self::GoodProgress => "good_progress",
            Self::Overreached => "overreached",
        }
    }
}

impl fmt::Display for LoadTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides next week's running minutes from the last two weeks of load
#[derive(Debug, Clone)]
pub struct LoadAdaptationPolicy {
    config: AdaptationConfig,
}

impl Default for LoadAdaptationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadAdaptationPolicy {
    /// Create a policy from the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().adaptation.clone())
    }

    /// Create a policy with explicit configuration
    #[must_use]
    pub const fn with_config(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    /// Classify the load trend
    ///
    /// Bands are checked in order: no prior load, drop, overreach, progress.
    /// Anything left over is `Maintain`.
    #[must_use]
    pub fn classify(&self, this_week_load: f64, last_week_load: f64) -> LoadTrend {
        let c = &self.config;
        if last_week_load <= 0.0 {
            LoadTrend::Maintain
        } else if this_week_load < c.undertrained_ratio * last_week_load {
            LoadTrend::Undertrained
        } else if this_week_load > c.overreached_ratio * last_week_load {
            LoadTrend::Overreached
        } else if this_week_load >= c.progress_lower_ratio * last_week_load
            && this_week_load <= c.progress_upper_ratio * last_week_load
        {
            LoadTrend::GoodProgress
        } else {
            LoadTrend::Maintain
        }
    }

    /// Minutes to prescribe for the coming week
    ///
    /// Zero prior minutes yields the seed volume. Otherwise the minutes are
    /// scaled by the trend's overload factor, rounded, raised to the seed, and
    /// finally capped at `floor(last_week_minutes x growth_cap)`. The cap is
    /// applied last, so a small prior week can prescribe less than the seed.
    #[must_use]
    pub fn next_week_minutes(
        &self,
        last_week_load: f64,
        this_week_load: f64,
        last_week_minutes: u32,
    ) -> u32 {
        let seed = self.config.seed_weekly_minutes;
        if last_week_minutes == 0 {
            return seed;
        }

        let minutes = f64::from(last_week_minutes);
        let factor = self
            .classify(this_week_load, last_week_load)
            .overload_factor(&self.config);
        let ceiling = (minutes * self.config.growth_cap).floor();

        let proposed = (minutes * factor).round().max(f64::from(seed));
        proposed.min(ceiling) as u32
    }
}
