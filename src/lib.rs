// ABOUTME: Main library entry point for the Stride adaptive training plan engine
// ABOUTME: Provides training load scoring, weekly adaptation, plan regeneration, and pace advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

#![deny(unsafe_code)]

//! # Stride Engine
//!
//! Turns a runner's history of completed sessions into:
//!
//! - a training-load score (Bannister TRIMP)
//! - a decision about next week's running volume (progressive overload capped at +10%)
//! - a concrete calendar of sessions honoring the runner's selected weekdays
//! - a recommended easy pace
//!
//! History is never rewritten: runs dated before "today" and runs that are not
//! `Planned` survive every regeneration untouched.
//!
//! ## Architecture
//!
//! - **Models** (`stride-core`): plan, run, week window, onboarding profile
//! - **Intelligence**: the engine components, pure and synchronous
//! - **Config**: environment-driven engine parameters
//! - **Plan store**: persistence seam plus the sync payload codec
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use stride_engine::intelligence::PlanRegenerator;
//! use stride_engine::models::PlanType;
//!
//! let regenerator = PlanRegenerator::new();
//! let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default();
//! let plan = regenerator.generate_initial_plan(
//!     PlanType::FiveK,
//!     3,
//!     start,
//!     &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
//! );
//! assert_eq!(plan.runs.len(), 24);
//! ```

/// Environment-driven engine configuration
pub mod config;

/// Engine constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Engine components: load, adaptation, scheduling, regeneration, pace
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Plan data model
pub mod models;

/// Plan persistence and sync payload
pub mod plan_store;
