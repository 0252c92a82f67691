// ABOUTME: Configuration management module for engine parameters
// ABOUTME: Exposes the environment-driven engine configuration and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
//! Configuration module for the Stride engine
//!
//! - **Engine**: training load, adaptation policy, plan horizon, and pace advisor settings

/// Engine configuration and strategies
pub mod engine;

pub use engine::{
    AdaptationConfig, ConfigError, EngineConfig, LoadModelConfig, PaceConfig, ScheduleConfig,
};
