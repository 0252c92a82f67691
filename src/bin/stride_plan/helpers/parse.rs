// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
// ABOUTME: Argument parsers for stride-plan
// ABOUTME: Accepts weekday abbreviations and full names in any case

use chrono::Weekday;
use stride_engine::errors::AppError;

/// Parse `mon`..`sun` or a full weekday name
pub fn parse_weekday(value: &str) -> Result<Weekday, AppError> {
    match value.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thurs" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        other => Err(AppError::invalid_input(format!(
            "Unknown weekday: {other}. Use mon, tue, wed, thu, fri, sat, or sun"
        ))),
    }
}
