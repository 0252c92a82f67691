// ABOUTME: Tests for engine configuration defaults, environment overrides, and validation
// ABOUTME: Runs serially because STRIDE_* environment variables are process-global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use serial_test::serial;
use stride_engine::config::{ConfigError, EngineConfig};
use stride_engine::errors::{AppError, ErrorCode};
use stride_engine::intelligence::MaxHrAlgorithm;

/// Set `vars` for the duration of `f`, then remove them
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    for (key, value) in vars {
        env::set_var(key, value);
    }
    f();
    for (key, _) in vars {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_engine_constants() {
    let config = EngineConfig::default();
    config.validate().unwrap();

    assert!((config.load.default_intensity_ratio - 0.65).abs() < f64::EPSILON);
    assert!((config.load.max_intensity_ratio - 1.2).abs() < f64::EPSILON);
    assert_eq!(config.load.max_hr_algorithm, MaxHrAlgorithm::Tanaka);
    assert_eq!(config.adaptation.seed_weekly_minutes, 150);
    assert!((config.adaptation.progress_overload_factor - 1.05).abs() < f64::EPSILON);
    assert!((config.adaptation.growth_cap - 1.10).abs() < f64::EPSILON);
    assert_eq!(config.schedule.horizon_weeks, 16);
    assert_eq!(config.schedule.regeneration_weekly_minutes, 150);
    assert_eq!(config.pace.sample_size, 5);
    assert!((config.pace.fallback_pace_seconds - 450.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    with_env(
        &[
            ("STRIDE_SEED_WEEKLY_MINUTES", "180"),
            ("STRIDE_MAX_HR_ALGORITHM", "fox"),
            ("STRIDE_PLAN_HORIZON_WEEKS", "20"),
            ("STRIDE_PACE_BUFFER_SECONDS", "5"),
        ],
        || {
            let config = EngineConfig::load().unwrap();
            assert_eq!(config.adaptation.seed_weekly_minutes, 180);
            assert_eq!(config.load.max_hr_algorithm, MaxHrAlgorithm::Fox);
            assert_eq!(config.schedule.horizon_weeks, 20);
            assert!((config.pace.safety_buffer_seconds - 5.0).abs() < f64::EPSILON);
        },
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    with_env(&[("STRIDE_GROWTH_CAP", "lots")], || {
        let err = EngineConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("STRIDE_GROWTH_CAP")));
    });
}

#[test]
#[serial]
fn test_invalid_override_fails_validation() {
    with_env(&[("STRIDE_PLAN_HORIZON_WEEKS", "0")], || {
        assert!(matches!(
            EngineConfig::load(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    });
}

#[test]
fn test_validation_rejects_inconsistent_settings() {
    let mut config = EngineConfig::default();
    config.adaptation.growth_cap = 0.95;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = EngineConfig::default();
    config.adaptation.progress_overload_factor = 1.2;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.adaptation.undertrained_ratio = 1.05;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.load.default_intensity_ratio = 1.5;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.pace.aerobic_share_threshold = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = EngineConfig::default();
    config.pace.sample_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let app_error: AppError = ConfigError::Parse("Invalid STRIDE_GROWTH_CAP".into()).into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);
    assert!(app_error.to_string().contains("STRIDE_GROWTH_CAP"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.adaptation.seed_weekly_minutes, 150);
    assert_eq!(parsed.load.max_hr_algorithm, MaxHrAlgorithm::Tanaka);
}
