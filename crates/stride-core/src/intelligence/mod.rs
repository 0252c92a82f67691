// ABOUTME: Intelligence module re-exports for algorithm types used by the models
// ABOUTME: Contains MaxHrAlgorithm for age-predicted maximum heart rate

/// Maximum heart rate estimation algorithms
pub mod algorithms;

pub use algorithms::MaxHrAlgorithm;
