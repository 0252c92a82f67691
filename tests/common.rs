// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus date, run, and plan builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stride_engine`

use std::collections::BTreeMap;
use std::env;
use std::sync::Once;

use chrono::NaiveDate;
use stride_engine::config::EngineConfig;
use stride_engine::intelligence::{PlanRegenerator, WeeklyScheduler};
use stride_engine::models::{
    ActualMetrics, GeneratedPlan, HeartRateZone, PlanType, RunStatus, ScheduledRun,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Regenerator using default configuration, independent of `STRIDE_*` variables
pub fn regenerator() -> PlanRegenerator {
    init_test_logging();
    PlanRegenerator::with_config(&EngineConfig::default())
}

/// Planned easy run of `minutes` on `date`
pub fn planned_run(date: NaiveDate, minutes: u32) -> ScheduledRun {
    ScheduledRun::planned(date, WeeklyScheduler::easy_aerobic_template(minutes))
}

/// Completed run with recorded metrics and a zone breakdown
///
/// `zone2_share` of the elapsed time goes to zone 2 and the rest to zone 3.
pub fn completed_run(
    date: NaiveDate,
    minutes: u32,
    distance_km: f64,
    avg_heart_rate: Option<u32>,
    zone2_share: f64,
) -> ScheduledRun {
    let elapsed = minutes * 60;
    let zone2 = (f64::from(elapsed) * zone2_share).round() as u32;
    let zone_seconds = BTreeMap::from([
        (HeartRateZone::Zone2, zone2),
        (HeartRateZone::Zone3, elapsed - zone2),
    ]);
    let mut run = planned_run(date, minutes);
    run.status = RunStatus::Completed;
    run.actual = Some(ActualMetrics {
        elapsed_seconds: Some(elapsed),
        distance_km: Some(distance_km),
        avg_pace_sec_per_km: Some(f64::from(elapsed) / distance_km),
        avg_heart_rate,
        zone_seconds,
    });
    run
}

/// Completed run without heart rate or zone data
pub fn completed_run_without_hr(date: NaiveDate, minutes: u32) -> ScheduledRun {
    let mut run = planned_run(date, minutes);
    run.status = RunStatus::Completed;
    run.actual = Some(ActualMetrics {
        elapsed_seconds: Some(minutes * 60),
        ..ActualMetrics::default()
    });
    run
}

/// Plan of the given runs, sorted by date
pub fn plan_of(runs: Vec<ScheduledRun>) -> GeneratedPlan {
    GeneratedPlan::new(PlanType::TenK, runs)
}

/// Whether every run in `plan` is sorted ascending by date
pub fn is_sorted_by_date(plan: &GeneratedPlan) -> bool {
    plan.runs.windows(2).all(|pair| pair[0].date <= pair[1].date)
}

