// ABOUTME: Recommends an easy aerobic pace from recent zone-2 dominated runs
// ABOUTME: Averages distance-weighted pace, adds safety buffers, and formats as M:SS/km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use std::collections::BTreeMap;

use chrono::NaiveDate;
use stride_core::intelligence::MaxHrAlgorithm;
use stride_core::models::{ActualMetrics, HeartRateZone, OnboardingProfile, ScheduledRun};
use tracing::debug;

use crate::config::{EngineConfig, PaceConfig};

/// Format seconds per kilometre as `M:SS/km`, rounded to the nearest second
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.max(0.0).round() as u64;
    format!("{}:{:02}/km", total / 60, total % 60)
}

/// Recommends the easy-run pace band
#[derive(Debug, Clone)]
pub struct PaceAdvisor {
    config: PaceConfig,
    max_hr_algorithm: MaxHrAlgorithm,
}

impl Default for PaceAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaceAdvisor {
    /// Create an advisor from the global engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global())
    }

    /// Create an advisor with explicit configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            config: config.pace.clone(),
            max_hr_algorithm: config.load.max_hr_algorithm,
        }
    }

    /// Recommended pace as `M:SS/km`, or the fallback pace when no run qualifies
    #[must_use]
    pub fn recommend_pace(
        &self,
        reference_date: NaiveDate,
        runs: &[ScheduledRun],
        onboarding: Option<&OnboardingProfile>,
    ) -> String {
        let seconds = self
            .recommend_pace_seconds(reference_date, runs, onboarding)
            .unwrap_or(self.config.fallback_pace_seconds);
        format_pace(seconds)
    }

    /// Recommended pace in seconds per kilometre
    ///
    /// Considers completed runs on or before `reference_date` whose zone-2
    /// share reaches the aerobic threshold, most recent first, up to the
    /// sample size. Runs without positive distance and elapsed time do not
    /// contribute. The distance-weighted average gets the safety buffer, plus
    /// a penalty when the latest completed run was not aerobic enough. A latest
    /// run with no recorded metrics or zone data never triggers the penalty.
    /// Returns `None` when nothing can be averaged.
    #[must_use]
    pub fn recommend_pace_seconds(
        &self,
        reference_date: NaiveDate,
        runs: &[ScheduledRun],
        onboarding: Option<&OnboardingProfile>,
    ) -> Option<f64> {
        let max_heart_rate =
            onboarding.map(|profile| profile.effective_max_heart_rate(self.max_hr_algorithm));

        let mut completed: Vec<&ScheduledRun> = runs
            .iter()
            .filter(|run| run.is_completed() && run.date <= reference_date)
            .collect();
        completed.sort_by(|a, b| b.date.cmp(&a.date));

        let share_of = |actual: &ActualMetrics| aerobic_share(actual, max_heart_rate);

        let (total_seconds, total_km, sampled) = completed
            .iter()
            .filter_map(|run| run.actual.as_ref())
            .filter(|actual| {
                share_of(actual).is_some_and(|share| share >= self.config.aerobic_share_threshold)
            })
            .take(self.config.sample_size)
            .filter_map(|actual| {
                Some((
                    actual.positive_elapsed_seconds()?,
                    actual.positive_distance_km()?,
                ))
            })
            .fold((0.0, 0.0, 0_usize), |(seconds, km, n), (elapsed, distance)| {
                (seconds + f64::from(elapsed), km + distance, n + 1)
            });

        if sampled == 0 || total_km <= 0.0 {
            debug!(%reference_date, "No qualifying aerobic runs for pace");
            return None;
        }

        let mut pace = total_seconds / total_km + self.config.safety_buffer_seconds;
        let latest_share = completed
            .first()
            .and_then(|run| run.actual.as_ref())
            .and_then(share_of);
        if latest_share.is_some_and(|share| share < self.config.low_aerobic_share_threshold) {
            pace += self.config.low_aerobic_penalty_seconds;
        }

        debug!(sampled, pace, "Computed recommended easy pace");
        Some(pace)
    }
}

/// Zone-2 share of a run
///
/// Runs without a zone breakdown are attributed entirely to the zone of their
/// average heart rate when a max heart rate is known.
fn aerobic_share(actual: &ActualMetrics, max_heart_rate: Option<f64>) -> Option<f64> {
    if !actual.zone_seconds.is_empty() {
        return actual.aerobic_share();
    }
    let max_hr = max_heart_rate.filter(|&hr| hr > 0.0)?;
    let elapsed = actual.positive_elapsed_seconds()?;
    let zone = HeartRateZone::from_heart_rate(f64::from(actual.avg_heart_rate?), max_hr);
    let attributed = ActualMetrics {
        zone_seconds: BTreeMap::from([(zone, elapsed)]),
        ..actual.clone()
    };
    attributed.aerobic_share()
}
