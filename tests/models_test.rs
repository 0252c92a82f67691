// ABOUTME: Tests for the plan data model: zones, plan types, run metrics, and athlete profiles
// ABOUTME: Also checks the JSON field names the sync payload depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;

use common::{completed_run, date, planned_run};
use stride_engine::errors::ErrorCode;
use stride_engine::intelligence::MaxHrAlgorithm;
use stride_engine::models::{
    ActualMetrics, HeartRateZone, OnboardingProfile, PlanType, RunStatus, Sex,
};

#[test]
fn test_heart_rate_zone_boundaries() {
    let max = 200.0;
    assert_eq!(HeartRateZone::from_heart_rate(119.0, max), HeartRateZone::Zone1);
    assert_eq!(HeartRateZone::from_heart_rate(120.0, max), HeartRateZone::Zone2);
    assert_eq!(HeartRateZone::from_heart_rate(139.0, max), HeartRateZone::Zone2);
    assert_eq!(HeartRateZone::from_heart_rate(140.0, max), HeartRateZone::Zone3);
    assert_eq!(HeartRateZone::from_heart_rate(170.0, max), HeartRateZone::Zone4);
    assert_eq!(HeartRateZone::from_heart_rate(185.0, max), HeartRateZone::Zone5);
}

#[test]
fn test_heart_rate_zone_numbers() {
    for number in 1..=5 {
        assert_eq!(HeartRateZone::from_number(number).unwrap().number(), number);
    }
    let err = HeartRateZone::from_number(6).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(HeartRateZone::Zone2.to_string(), "Z2");
}

#[test]
fn test_plan_type_durations_and_aliases() {
    assert_eq!(PlanType::HalfMarathon.duration_weeks(), 10);
    assert_eq!(PlanType::FiveK.duration_weeks(), 8);
    assert_eq!(PlanType::AerobicBase.duration_weeks(), 8);

    assert_eq!("5k".parse::<PlanType>().unwrap(), PlanType::FiveK);
    assert_eq!("half-marathon".parse::<PlanType>().unwrap(), PlanType::HalfMarathon);
    assert_eq!("MAF".parse::<PlanType>().unwrap(), PlanType::AerobicBase);
    assert!("ultra".parse::<PlanType>().is_err());
}

#[test]
fn test_only_planned_runs_are_unlocked() {
    assert!(!RunStatus::Planned.is_locked());
    assert!(RunStatus::InProgress.is_locked());
    assert!(RunStatus::Completed.is_locked());
    assert!(RunStatus::Skipped.is_locked());
}

#[test]
fn test_aerobic_share() {
    let metrics = ActualMetrics {
        elapsed_seconds: Some(1000),
        zone_seconds: BTreeMap::from([(HeartRateZone::Zone2, 750), (HeartRateZone::Zone3, 250)]),
        ..ActualMetrics::default()
    };
    assert!((metrics.aerobic_share().unwrap() - 0.75).abs() < f64::EPSILON);

    let no_zones = ActualMetrics {
        elapsed_seconds: Some(1000),
        ..ActualMetrics::default()
    };
    assert!(no_zones.aerobic_share().is_none());

    let no_elapsed = ActualMetrics {
        zone_seconds: BTreeMap::from([(HeartRateZone::Zone2, 600)]),
        ..ActualMetrics::default()
    };
    assert!(no_elapsed.aerobic_share().is_none());
}

#[test]
fn test_effective_duration_prefers_actual_elapsed() {
    let completed = completed_run(date(2026, 10, 19), 45, 8.0, None, 0.8);
    assert_eq!(completed.effective_duration_seconds(), 2700);

    let mut zero_elapsed = planned_run(date(2026, 10, 19), 30);
    zero_elapsed.actual = Some(ActualMetrics {
        elapsed_seconds: Some(0),
        ..ActualMetrics::default()
    });
    assert_eq!(zero_elapsed.effective_duration_seconds(), 1800);
}

#[test]
fn test_effective_max_heart_rate_resolution() {
    let measured = OnboardingProfile {
        age: Some(30),
        max_heart_rate: Some(196),
        ..OnboardingProfile::default()
    };
    assert!((measured.effective_max_heart_rate(MaxHrAlgorithm::Tanaka) - 196.0).abs() < 1e-9);

    let by_age = OnboardingProfile {
        age: Some(30),
        ..OnboardingProfile::default()
    };
    assert!((by_age.effective_max_heart_rate(MaxHrAlgorithm::Fox) - 190.0).abs() < 1e-9);
    assert!((by_age.effective_max_heart_rate(MaxHrAlgorithm::Tanaka) - 187.0).abs() < 1e-9);

    let female = OnboardingProfile {
        age: Some(50),
        sex: Sex::Female,
        ..OnboardingProfile::default()
    };
    assert!((female.effective_max_heart_rate(MaxHrAlgorithm::Gulati) - 162.0).abs() < 1e-9);

    let unknown = OnboardingProfile::default();
    assert!((unknown.effective_max_heart_rate(MaxHrAlgorithm::Tanaka) - 190.0).abs() < 1e-9);
}

#[test]
fn test_run_json_field_names() {
    let mut run = completed_run(date(2026, 10, 19), 30, 5.0, Some(140), 1.0);
    run.status = RunStatus::InProgress;
    let value = serde_json::to_value(&run).unwrap();

    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["date"], "2026-10-19");
    assert_eq!(value["template"]["kind"], "easy");
    assert_eq!(value["template"]["target_zone"], "zone2");
    assert_eq!(value["actual"]["zone_seconds"]["zone2"], 1800);
}

#[test]
fn test_profile_deserializes_with_defaults() {
    let profile: OnboardingProfile =
        serde_json::from_str(r#"{"age": 41, "selected_days": ["Mon", "Thu"]}"#).unwrap();
    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.selected_days.len(), 2);
    assert!(profile.max_heart_rate.is_none());
}
