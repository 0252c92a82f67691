// ABOUTME: Heart rate zone boundaries as fractions of maximum heart rate
// ABOUTME: Five-zone model shared by zone classification and pace advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

/// Upper bound (exclusive) of zone 1
pub const ZONE1_UPPER: f64 = 0.60;
/// Upper bound (exclusive) of zone 2, the aerobic zone
pub const ZONE2_UPPER: f64 = 0.70;
/// Upper bound (exclusive) of zone 3
pub const ZONE3_UPPER: f64 = 0.80;
/// Upper bound (exclusive) of zone 4; anything above is zone 5
pub const ZONE4_UPPER: f64 = 0.90;
