// ABOUTME: Intelligence algorithm types shared with the engine crate
// ABOUTME: Contains MaxHrAlgorithm for heart rate estimation

/// Maximum heart rate estimation algorithms
pub mod maxhr;

pub use maxhr::MaxHrAlgorithm;
