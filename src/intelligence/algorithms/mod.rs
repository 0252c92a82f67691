// ABOUTME: Algorithm layer for training load scoring and max heart rate estimation
// ABOUTME: Provides the TRIMP load model and re-exports the max HR formula selector

//! Algorithm Module
//!
//! - `trimp`: Bannister TRIMP per-session load and load totals
//! - `MaxHrAlgorithm`: age-predicted max heart rate formula (Fox, Tanaka, Gulati)
//!
//! # Example
//!
//! ```rust
//! use stride_engine::intelligence::algorithms::TrainingLoadModel;
//! use stride_engine::models::Sex;
//!
//! let model = TrainingLoadModel::new();
//! let load = model.session_load(3600.0, Some(150.0), 190.0, Sex::Male);
//! assert!(load > 0.0);
//! ```

pub mod trimp;

pub use stride_core::intelligence::algorithms::maxhr;
pub use stride_core::intelligence::MaxHrAlgorithm;
pub use trimp::{BannisterCoefficients, TrainingLoadModel};
