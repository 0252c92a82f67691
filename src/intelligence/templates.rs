// ABOUTME: Goal-specific ordered run template lists used to build onboarding plans
// ABOUTME: Mixes long, tempo, interval, easy, and aerobic-focus sessions per plan type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

use stride_core::models::{HeartRateZone, PlanType, RunTemplate, TrainingFocus, WorkoutKind};

fn template(
    name: &str,
    kind: WorkoutKind,
    focus: TrainingFocus,
    minutes: u32,
    distance_km: Option<f64>,
    zone: HeartRateZone,
    notes: &str,
) -> RunTemplate {
    RunTemplate {
        name: name.to_owned(),
        kind,
        focus,
        target_duration_seconds: Some(minutes * 60),
        target_distance_km: distance_km,
        target_zone: Some(zone),
        notes: notes.to_owned(),
    }
}

fn easy(minutes: u32) -> RunTemplate {
    template(
        "Easy Run",
        WorkoutKind::Easy,
        TrainingFocus::AerobicBase,
        minutes,
        None,
        HeartRateZone::Zone2,
        "Conversational pace, you should be able to speak in full sentences.",
    )
}

fn long(minutes: u32, distance_km: f64) -> RunTemplate {
    template(
        "Long Run",
        WorkoutKind::Long,
        TrainingFocus::Endurance,
        minutes,
        Some(distance_km),
        HeartRateZone::Zone2,
        "Steady and relaxed. Time on feet matters more than pace.",
    )
}

fn tempo(minutes: u32) -> RunTemplate {
    template(
        "Tempo Run",
        WorkoutKind::Tempo,
        TrainingFocus::Threshold,
        minutes,
        None,
        HeartRateZone::Zone3,
        "10 min easy, then a comfortably hard block, then 5 min easy.",
    )
}

fn intervals(minutes: u32, reps: u32) -> RunTemplate {
    template(
        "Intervals",
        WorkoutKind::Intervals,
        TrainingFocus::Speed,
        minutes,
        None,
        HeartRateZone::Zone4,
        &format!("Warm up, then {reps} x 3 min hard with 2 min jog recoveries."),
    )
}

fn aerobic_focus(minutes: u32) -> RunTemplate {
    template(
        "MAF Run",
        WorkoutKind::AerobicFocus,
        TrainingFocus::AerobicBase,
        minutes,
        None,
        HeartRateZone::Zone2,
        "Keep heart rate capped at the top of zone 2, walk hills if needed.",
    )
}

fn recovery(minutes: u32) -> RunTemplate {
    template(
        "Recovery Run",
        WorkoutKind::Recovery,
        TrainingFocus::Recovery,
        minutes,
        None,
        HeartRateZone::Zone1,
        "Very easy shakeout. Stop early if legs feel heavy.",
    )
}

/// Ordered templates cycled through when building an onboarding plan
#[must_use]
pub fn templates_for(plan_type: PlanType) -> Vec<RunTemplate> {
    match plan_type {
        PlanType::StartRunning => vec![easy(20), recovery(20), easy(25), long(35, 4.0)],
        PlanType::FiveK => vec![easy(30), intervals(35, 5), recovery(25), long(45, 7.0)],
        PlanType::TenK => vec![easy(40), tempo(40), intervals(45, 6), long(60, 12.0)],
        PlanType::HalfMarathon => vec![
            easy(45),
            tempo(50),
            aerobic_focus(45),
            intervals(50, 6),
            long(90, 16.0),
        ],
        PlanType::AerobicBase => vec![aerobic_focus(40), easy(35), aerobic_focus(45), long(60, 9.0)],
    }
}
