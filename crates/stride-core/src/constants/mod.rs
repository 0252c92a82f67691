// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for training load, adaptation, scheduling, and pace advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! Constants module
//!
//! Engine defaults grouped by domain. Runtime overrides live in the engine's
//! configuration layer; these values are what it falls back to.

/// Heart rate zone boundaries expressed as a fraction of max heart rate
pub mod heart_rate;

/// Bannister TRIMP coefficients and intensity defaults
pub mod trimp {
    /// Male Bannister coefficients `(k1, k2)`
    pub const MALE_COEFFICIENTS: (f64, f64) = (0.64, 1.92);
    /// Female Bannister coefficients `(k1, k2)`
    pub const FEMALE_COEFFICIENTS: (f64, f64) = (0.86, 1.67);
    /// Intensity ratio assumed when a session has no heart rate data
    pub const DEFAULT_INTENSITY_RATIO: f64 = 0.65;
    /// Upper clamp for `avg_hr / max_hr`
    pub const MAX_INTENSITY_RATIO: f64 = 1.2;
    /// Max heart rate used when neither an override nor an age is known
    pub const DEFAULT_MAX_HEART_RATE: u32 = 190;
}

/// Week-over-week load adaptation policy
pub mod adaptation {
    /// Cold-start weekly volume, also the floor of every prescription
    pub const SEED_WEEKLY_MINUTES: u32 = 150;
    /// Below this fraction of last week's load the week is undertrained
    pub const UNDERTRAINED_RATIO: f64 = 0.9;
    /// Lower bound (inclusive) of the good-progress band
    pub const PROGRESS_LOWER_RATIO: f64 = 1.0;
    /// Upper bound (inclusive) of the good-progress band
    pub const PROGRESS_UPPER_RATIO: f64 = 1.1;
    /// Above this fraction of last week's load the week is overreached
    pub const OVERREACHED_RATIO: f64 = 1.2;
    /// Volume multiplier applied after a good-progress week
    pub const PROGRESS_OVERLOAD_FACTOR: f64 = 1.05;
    /// Hard week-over-week growth ceiling
    pub const GROWTH_CAP: f64 = 1.10;
}

/// Plan calendar constants
pub mod schedule {
    /// Weeks covered by regeneration, measured from the plan's first week
    pub const PLAN_HORIZON_WEEKS: u32 = 16;
    /// Length of a standard onboarding plan
    pub const DEFAULT_PLAN_WEEKS: u32 = 8;
    /// Length of a half-marathon preparation plan
    pub const HALF_MARATHON_PLAN_WEEKS: u32 = 10;
    /// Days in a week window
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Most runs an onboarding plan schedules per week
    pub const MAX_RUNS_PER_WEEK: u32 = 7;
}

/// Pace recommendation constants
pub mod pace {
    /// Minimum zone-2 share for a run to count as a quality aerobic session
    pub const AEROBIC_SHARE_THRESHOLD: f64 = 0.70;
    /// Below this zone-2 share the latest run triggers the extra buffer
    pub const LOW_AEROBIC_SHARE_THRESHOLD: f64 = 0.50;
    /// Most recent qualifying runs considered
    pub const SAMPLE_SIZE: usize = 5;
    /// Conservative buffer added to every recommendation (sec/km)
    pub const SAFETY_BUFFER_SECONDS: f64 = 10.0;
    /// Extra buffer when the latest run drifted out of zone 2 (sec/km)
    pub const LOW_AEROBIC_PENALTY_SECONDS: f64 = 15.0;
    /// Fallback recommendation, 7:30/km
    pub const FALLBACK_PACE_SECONDS: f64 = 450.0;
}
