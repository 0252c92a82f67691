// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
// ABOUTME: Output formatting helpers for stride-plan
// ABOUTME: Prints plan calendars and adaptation decisions for the terminal

use stride_engine::intelligence::{AdaptationDecision, AdaptationOutcome};
use stride_engine::models::GeneratedPlan;

/// Print one line per run
pub fn print_plan_summary(plan: &GeneratedPlan) {
    println!("Plan: {} ({} runs)", plan.plan_type, plan.runs.len());
    println!("{}", "=".repeat(72));
    for run in &plan.runs {
        let zone = run
            .template
            .target_zone
            .map_or_else(|| "--".to_owned(), |zone| zone.to_string());
        println!(
            "{} {:<3} {:<16} {:>4} min  {:<3} {:?}  {}",
            run.date,
            run.date.format("%a"),
            run.template.name,
            run.template.target_minutes(),
            zone,
            run.status,
            run.id
        );
    }
}

/// Print what a weekly adaptation did
pub fn print_adaptation(outcome: &AdaptationOutcome) {
    match &outcome.decision {
        AdaptationDecision::Applied {
            performance,
            next_week_minutes,
        } => {
            println!("Adaptation applied");
            println!("   Trend: {}", performance.trend);
            println!(
                "   Last week: {} min, load {:.1}",
                performance.completed_minutes, performance.completed_load
            );
            println!(
                "   Week before: {} min, load {:.1}",
                performance.previous_completed_minutes, performance.previous_load
            );
            println!("   This week: {next_week_minutes} min");
        }
        AdaptationDecision::Skipped { reason } => {
            println!("Adaptation skipped: {reason}");
        }
    }

    match outcome.next_due_on {
        Some(date) => println!("Next adaptation due: {date}"),
        None => println!("Next adaptation due: never (plan horizon reached)"),
    }
}
