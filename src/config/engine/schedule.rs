// ABOUTME: Plan calendar configuration for regeneration and adaptation horizons
// ABOUTME: Configures the plan horizon and the weekly volume used when regenerating

use serde::{Deserialize, Serialize};
use stride_core::constants::adaptation::SEED_WEEKLY_MINUTES;
use stride_core::constants::schedule::PLAN_HORIZON_WEEKS;

/// Plan calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Weeks covered by the plan, measured from its first week
    pub horizon_weeks: u32,
    /// Weekly minutes used for every week rebuilt by a schedule change
    pub regeneration_weekly_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            horizon_weeks: PLAN_HORIZON_WEEKS,
            regeneration_weekly_minutes: SEED_WEEKLY_MINUTES,
        }
    }
}
