// ABOUTME: Training load model configuration for the TRIMP calculation
// ABOUTME: Configures the missing-heart-rate intensity default, ratio clamp, and max HR formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use serde::{Deserialize, Serialize};
use stride_core::constants::trimp::{DEFAULT_INTENSITY_RATIO, MAX_INTENSITY_RATIO};
use stride_core::intelligence::MaxHrAlgorithm;

/// TRIMP model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadModelConfig {
    /// Intensity ratio assumed when a session has no heart rate data
    pub default_intensity_ratio: f64,
    /// Upper clamp for `avg_hr / max_hr`
    pub max_intensity_ratio: f64,
    /// Formula used to estimate max HR from age when none was measured
    pub max_hr_algorithm: MaxHrAlgorithm,
}

impl Default for LoadModelConfig {
    fn default() -> Self {
        Self {
            default_intensity_ratio: DEFAULT_INTENSITY_RATIO,
            max_intensity_ratio: MAX_INTENSITY_RATIO,
            max_hr_algorithm: MaxHrAlgorithm::default(),
        }
    }
}
