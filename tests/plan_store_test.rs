// ABOUTME: Tests for plan persistence adapters and the sync payload codec
// ABOUTME: Uses temporary directories for the JSON file store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use chrono::Weekday;
use common::{completed_run, date, plan_of, planned_run, regenerator};
use stride_engine::errors::ErrorCode;
use stride_engine::models::{PlanType, RunStatus};
use stride_engine::plan_store::{
    decode_sync_payload, default_plan_path, encode_sync_payload, InMemoryPlanStore,
    JsonFilePlanStore, PlanStore, PLAN_FILE_NAME,
};
use tempfile::TempDir;

#[test]
fn test_json_store_missing_file_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = JsonFilePlanStore::new(dir.path().join("plan.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_json_store_round_trips_plan() {
    let dir = TempDir::new().unwrap();
    let store = JsonFilePlanStore::new(dir.path().join("nested").join("stride").join("plan.json"));
    let plan = regenerator().generate_initial_plan(
        PlanType::AerobicBase,
        3,
        date(2026, 10, 19),
        &[Weekday::Mon, Weekday::Wed, Weekday::Sat],
    );

    store.save(&plan).unwrap();
    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());
    assert_eq!(store.load().unwrap(), Some(plan.clone()));

    // Saving again replaces the previous plan
    let shorter = plan_of(vec![planned_run(date(2026, 10, 20), 30)]);
    store.save(&shorter).unwrap();
    assert_eq!(store.load().unwrap(), Some(shorter));
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, b"{ not json").unwrap();

    let err = JsonFilePlanStore::new(path).load().unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_in_memory_store() {
    let store = InMemoryPlanStore::new();
    assert!(store.load().unwrap().is_none());

    let plan = plan_of(vec![planned_run(date(2026, 10, 19), 45)]);
    store.save(&plan).unwrap();
    assert_eq!(store.load().unwrap(), Some(plan.clone()));
    assert_eq!(
        InMemoryPlanStore::with_plan(plan.clone()).load().unwrap(),
        Some(plan)
    );
}

#[test]
fn test_sync_payload_preserves_every_field() {
    let mut skipped = planned_run(date(2026, 10, 21), 40);
    skipped.status = RunStatus::Skipped;
    let plan = plan_of(vec![
        completed_run(date(2026, 10, 19), 50, 10.0, Some(142), 0.75),
        skipped,
        planned_run(date(2026, 10, 23), 60),
    ]);

    let bytes = encode_sync_payload(&plan).unwrap();
    assert_eq!(decode_sync_payload(&bytes).unwrap(), plan);
}

#[test]
fn test_sync_payload_restores_date_order() {
    let late = planned_run(date(2026, 10, 30), 30);
    let early = planned_run(date(2026, 10, 20), 30);
    let json = serde_json::json!({
        "plan_type": "five_k",
        "runs": [late, early],
    });

    let plan = decode_sync_payload(json.to_string().as_bytes()).unwrap();
    assert_eq!(plan.plan_type, PlanType::FiveK);
    assert_eq!(plan.runs[0].id, early.id);
    assert_eq!(plan.runs[1].id, late.id);
}

#[test]
fn test_sync_payload_rejects_garbage() {
    let err = decode_sync_payload(b"\x00\x01").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_default_plan_path_ends_with_plan_file() {
    assert!(default_plan_path().ends_with(PLAN_FILE_NAME));
}
