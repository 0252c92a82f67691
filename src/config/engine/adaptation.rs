// ABOUTME: Load adaptation policy configuration for week-over-week volume decisions
// ABOUTME: Configures trend thresholds, the progress overload factor, seed volume, and growth cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use serde::{Deserialize, Serialize};
use stride_core::constants::adaptation::{
    GROWTH_CAP, OVERREACHED_RATIO, PROGRESS_LOWER_RATIO, PROGRESS_OVERLOAD_FACTOR,
    PROGRESS_UPPER_RATIO, SEED_WEEKLY_MINUTES, UNDERTRAINED_RATIO,
};

/// Load adaptation policy configuration
///
/// Ratios are expressed against last week's load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Cold-start weekly volume and floor of every prescription (minutes)
    pub seed_weekly_minutes: u32,
    /// Below this ratio the week is undertrained
    pub undertrained_ratio: f64,
    /// Lower bound (inclusive) of the good-progress band
    pub progress_lower_ratio: f64,
    /// Upper bound (inclusive) of the good-progress band
    pub progress_upper_ratio: f64,
    /// Above this ratio the week is overreached
    pub overreached_ratio: f64,
    /// Volume multiplier after a good-progress week
    pub progress_overload_factor: f64,
    /// Hard week-over-week growth ceiling
    pub growth_cap: f64,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            seed_weekly_minutes: SEED_WEEKLY_MINUTES,
            undertrained_ratio: UNDERTRAINED_RATIO,
            progress_lower_ratio: PROGRESS_LOWER_RATIO,
            progress_upper_ratio: PROGRESS_UPPER_RATIO,
            overreached_ratio: OVERREACHED_RATIO,
            progress_overload_factor: PROGRESS_OVERLOAD_FACTOR,
            growth_cap: GROWTH_CAP,
        }
    }
}
