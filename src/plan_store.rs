// ABOUTME: Persistence seam for generated plans with JSON file and in-memory adapters
// ABOUTME: Also encodes and decodes the plan sync payload exchanged with paired devices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! # Plan Store
//!
//! The engine never performs I/O itself. Callers load a [`GeneratedPlan`]
//! through a [`PlanStore`], run engine operations, and save the result.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stride_core::models::GeneratedPlan;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// File name of the plan inside the data directory
pub const PLAN_FILE_NAME: &str = "plan.json";

/// Load and save the single persisted plan
pub trait PlanStore {
    /// Load the stored plan, `None` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded
    fn load(&self) -> AppResult<Option<GeneratedPlan>>;

    /// Replace the stored plan
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn save(&self, plan: &GeneratedPlan) -> AppResult<()>;
}

/// Plan stored as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFilePlanStore {
    path: PathBuf,
}

impl JsonFilePlanStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStore for JsonFilePlanStore {
    fn load(&self) -> AppResult<Option<GeneratedPlan>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored plan");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read plan file {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };
        decode_sync_payload(&bytes).map(Some)
    }

    fn save(&self, plan: &GeneratedPlan) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so readers never see a partial file
        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(plan)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), runs = plan.runs.len(), "Saved plan");
        Ok(())
    }
}

/// Plan held in memory
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    plan: Mutex<Option<GeneratedPlan>>,
}

impl InMemoryPlanStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `plan`
    #[must_use]
    pub fn with_plan(plan: GeneratedPlan) -> Self {
        Self {
            plan: Mutex::new(Some(plan)),
        }
    }
}

impl PlanStore for InMemoryPlanStore {
    fn load(&self) -> AppResult<Option<GeneratedPlan>> {
        let guard = self
            .plan
            .lock()
            .map_err(|e| AppError::internal(format!("Plan store lock poisoned: {e}")))?;
        Ok(guard.clone())
    }

    fn save(&self, plan: &GeneratedPlan) -> AppResult<()> {
        let mut guard = self
            .plan
            .lock()
            .map_err(|e| AppError::internal(format!("Plan store lock poisoned: {e}")))?;
        *guard = Some(plan.clone());
        Ok(())
    }
}

/// Default plan file under the platform data directory
///
/// Falls back to the working directory when no data directory is known.
#[must_use]
pub fn default_plan_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("stride"))
        .unwrap_or_default()
        .join(PLAN_FILE_NAME)
}

/// Encode a plan into the bytes sent to a paired device
///
/// # Errors
///
/// Returns an error if the plan cannot be serialized
pub fn encode_sync_payload(plan: &GeneratedPlan) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec(plan)?)
}

/// Decode a plan received from a paired device
///
/// # Errors
///
/// Returns an error if the bytes are not a valid plan document
pub fn decode_sync_payload(bytes: &[u8]) -> AppResult<GeneratedPlan> {
    let plan: GeneratedPlan = serde_json::from_slice(bytes)?;
    // Restore date order for payloads written by other producers
    Ok(GeneratedPlan::new(plan.plan_type, plan.runs))
}
