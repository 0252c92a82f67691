// ABOUTME: Core types and constants for the Stride adaptive training plan engine
// ABOUTME: Foundation crate with error handling, engine constants, and plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! adaptive training plan engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine constants organized by domain
//! - **models**: Plan data model (`ScheduledRun`, `GeneratedPlan`, `WeekWindow`, ...)
//! - **intelligence**: Algorithm selection types used by the models (`MaxHrAlgorithm`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Plan data models (runs, templates, plans, week windows, athlete profile)
pub mod models;

/// Intelligence types (`MaxHrAlgorithm`)
pub mod intelligence;
