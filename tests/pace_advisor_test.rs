// ABOUTME: Integration tests for the easy pace recommendation
// ABOUTME: Covers aerobic filtering, sampling, buffers, heart rate attribution, and fallback

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{completed_run, completed_run_without_hr, date, planned_run};
use stride_engine::config::EngineConfig;
use stride_engine::intelligence::{format_pace, PaceAdvisor};
use stride_engine::models::{ActualMetrics, OnboardingProfile, RunStatus, ScheduledRun};

fn advisor() -> PaceAdvisor {
    common::init_test_logging();
    PaceAdvisor::with_config(&EngineConfig::default())
}

fn hr_only_run(minutes: u32, distance_km: f64, avg_heart_rate: u32) -> ScheduledRun {
    let mut run = planned_run(date(2026, 10, 17), minutes);
    run.status = RunStatus::Completed;
    run.actual = Some(ActualMetrics {
        elapsed_seconds: Some(minutes * 60),
        distance_km: Some(distance_km),
        avg_heart_rate: Some(avg_heart_rate),
        ..ActualMetrics::default()
    });
    run
}

#[test]
fn test_no_qualifying_runs_falls_back() {
    let advisor = advisor();
    assert_eq!(advisor.recommend_pace(date(2026, 10, 19), &[], None), "7:30/km");
    assert_eq!(advisor.recommend_pace_seconds(date(2026, 10, 19), &[], None), None);

    let runs = vec![
        completed_run(date(2026, 10, 16), 50, 10.0, Some(160), 0.2),
        planned_run(date(2026, 10, 18), 40),
    ];
    assert_eq!(advisor.recommend_pace(date(2026, 10, 19), &runs, None), "7:30/km");
}

#[test]
fn test_distance_weighted_average_plus_buffer() {
    let runs = vec![
        completed_run(date(2026, 10, 14), 60, 10.0, Some(135), 0.9),
        completed_run(date(2026, 10, 16), 50, 10.0, Some(135), 0.8),
    ];
    // (3600 + 3000) / 20 km = 330 s/km, plus 10 s/km buffer
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:40/km");
}

#[test]
fn test_pace_rounds_to_nearest_second() {
    let runs = vec![completed_run(date(2026, 10, 16), 50, 9.0, Some(135), 0.8)];
    // 3000 / 9 = 333.33 s/km + 10 = 343.33
    let seconds = advisor()
        .recommend_pace_seconds(date(2026, 10, 19), &runs, None)
        .unwrap();
    assert!((seconds - (3000.0 / 9.0 + 10.0)).abs() < 1e-9);
    assert_eq!(format_pace(seconds), "5:43/km");
}

#[test]
fn test_low_aerobic_latest_run_adds_penalty() {
    let runs = vec![
        completed_run(date(2026, 10, 14), 60, 10.0, Some(135), 0.9),
        completed_run(date(2026, 10, 16), 50, 10.0, Some(135), 0.8),
        completed_run(date(2026, 10, 18), 45, 9.0, Some(170), 0.3),
    ];
    // 330 + 10 + 15
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:55/km");
}

#[test]
fn test_penalty_follows_latest_completed_run_even_without_metrics() {
    let mut unrecorded = planned_run(date(2026, 10, 19), 30);
    unrecorded.status = RunStatus::Completed;
    let runs = vec![
        completed_run(date(2026, 10, 14), 60, 10.0, Some(135), 0.9),
        completed_run(date(2026, 10, 16), 50, 10.0, Some(135), 0.8),
        completed_run(date(2026, 10, 18), 45, 9.0, Some(170), 0.3),
        unrecorded,
    ];
    // The older low-aerobic run no longer decides the penalty
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:40/km");
}

#[test]
fn test_moderate_share_latest_run_is_excluded_without_penalty() {
    let runs = vec![
        completed_run(date(2026, 10, 16), 50, 10.0, Some(135), 0.8),
        completed_run(date(2026, 10, 18), 30, 4.0, Some(150), 0.6),
    ];
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:10/km");
}

#[test]
fn test_only_five_most_recent_qualifying_runs_count() {
    let mut runs: Vec<ScheduledRun> = (1..=5)
        .map(|day| completed_run(date(2026, 10, 10 + day), 50, 10.0, Some(135), 0.9))
        .collect();
    // Two much slower, older runs fall outside the sample
    runs.push(completed_run(date(2026, 10, 2), 90, 10.0, Some(135), 0.9));
    runs.push(completed_run(date(2026, 10, 3), 90, 10.0, Some(135), 0.9));

    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:10/km");
}

#[test]
fn test_runs_after_reference_date_are_ignored() {
    let runs = vec![
        completed_run(date(2026, 10, 16), 50, 10.0, Some(135), 0.8),
        completed_run(date(2026, 10, 20), 80, 10.0, Some(135), 0.9),
    ];
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:10/km");
}

#[test]
fn test_runs_without_distance_do_not_contribute() {
    let mut no_distance = completed_run(date(2026, 10, 17), 80, 10.0, Some(135), 0.9);
    no_distance.actual.as_mut().unwrap().distance_km = Some(0.0);
    let runs = vec![
        completed_run(date(2026, 10, 15), 50, 10.0, Some(135), 0.8),
        no_distance.clone(),
    ];
    assert_eq!(advisor().recommend_pace(date(2026, 10, 19), &runs, None), "5:10/km");
    assert_eq!(
        advisor().recommend_pace(date(2026, 10, 19), &[no_distance], None),
        "7:30/km"
    );
}

#[test]
fn test_heart_rate_attribution_requires_profile() {
    let advisor = advisor();
    // 130 / 190 = 68% of max: zone 2
    let runs = vec![hr_only_run(60, 10.0, 130)];
    let profile = OnboardingProfile::default();

    assert_eq!(advisor.recommend_pace(date(2026, 10, 19), &runs, None), "7:30/km");
    assert_eq!(
        advisor.recommend_pace(date(2026, 10, 19), &runs, Some(&profile)),
        "6:10/km"
    );

    // 160 / 190 = 84% of max: zone 4, does not qualify
    let hard = vec![hr_only_run(60, 10.0, 160)];
    assert_eq!(
        advisor.recommend_pace(date(2026, 10, 19), &hard, Some(&profile)),
        "7:30/km"
    );
}

#[test]
fn test_runs_without_zone_or_heart_rate_data_never_qualify() {
    let runs = vec![completed_run_without_hr(date(2026, 10, 16), 45)];
    let profile = OnboardingProfile::default();
    assert_eq!(
        advisor().recommend_pace(date(2026, 10, 19), &runs, Some(&profile)),
        "7:30/km"
    );
}

#[test]
fn test_format_pace() {
    assert_eq!(format_pace(450.0), "7:30/km");
    assert_eq!(format_pace(359.6), "6:00/km");
    assert_eq!(format_pace(65.0), "1:05/km");
}
