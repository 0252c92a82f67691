// ABOUTME: Engine constants re-exported from the stride-core foundation crate
// ABOUTME: Training load, adaptation, schedule, pace, and heart rate zone defaults

//! # Constants Module
//!
//! Compile-time defaults. Runtime values come from [`crate::config::EngineConfig`],
//! whose `Default` impls are built from these constants.

pub use stride_core::constants::{adaptation, heart_rate, pace, schedule, trimp};
