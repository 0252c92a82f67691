// ABOUTME: Pace advisor configuration for aerobic pace recommendations
// ABOUTME: Configures zone-2 share thresholds, sample size, safety buffers, and fallback pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use serde::{Deserialize, Serialize};
use stride_core::constants::pace::{
    AEROBIC_SHARE_THRESHOLD, FALLBACK_PACE_SECONDS, LOW_AEROBIC_PENALTY_SECONDS,
    LOW_AEROBIC_SHARE_THRESHOLD, SAFETY_BUFFER_SECONDS, SAMPLE_SIZE,
};

/// Pace advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Minimum zone-2 share for a run to qualify
    pub aerobic_share_threshold: f64,
    /// Zone-2 share below which the latest run adds the penalty buffer
    pub low_aerobic_share_threshold: f64,
    /// Most recent qualifying runs considered
    pub sample_size: usize,
    /// Buffer added to every recommendation (sec/km)
    pub safety_buffer_seconds: f64,
    /// Extra buffer when the latest run drifted out of zone 2 (sec/km)
    pub low_aerobic_penalty_seconds: f64,
    /// Pace returned when no run qualifies (sec/km)
    pub fallback_pace_seconds: f64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            aerobic_share_threshold: AEROBIC_SHARE_THRESHOLD,
            low_aerobic_share_threshold: LOW_AEROBIC_SHARE_THRESHOLD,
            sample_size: SAMPLE_SIZE,
            safety_buffer_seconds: SAFETY_BUFFER_SECONDS,
            low_aerobic_penalty_seconds: LOW_AEROBIC_PENALTY_SECONDS,
            fallback_pace_seconds: FALLBACK_PACE_SECONDS,
        }
    }
}
