//! Schedule configuration.
//!
//! Hosts pass configuration as JSON; every field is optional and falls back
//! to the practice defaults (08:00–18:00, 30-minute slots, advisory conflicts).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ClockTime;

/// Log filter used when `RUST_LOG` is unset and the host passes none.
pub const DEFAULT_LOG_FILTER: &str = "chairside_core=info";

/// Default grid row length.
pub const DEFAULT_SLOT_MINUTES: u16 = 30;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid working day: {0}")]
    WorkingDay(String),

    #[error("Slot length must be positive")]
    ZeroSlot,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Opening hours used for utilization and the slot grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkingDay {
    pub opens_at: ClockTime,
    pub closes_at: ClockTime,
}

impl WorkingDay {
    /// Length of the day in minutes (0 if closing is not after opening).
    pub fn minutes(&self) -> u32 {
        self.opens_at.minutes_until(self.closes_at).max(0) as u32
    }
}

impl Default for WorkingDay {
    fn default() -> Self {
        Self {
            opens_at: ClockTime::from_minutes_unchecked(8 * 60),
            closes_at: ClockTime::from_minutes_unchecked(18 * 60),
        }
    }
}

/// What the store does when a write collides with an existing booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Save anyway and report the collisions
    #[default]
    Advisory,
    /// Refuse the write
    Enforce,
}

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    pub working_day: WorkingDay,
    pub slot_minutes: u16,
    pub conflict_policy: ConflictPolicy,
    /// Count only the selected day's appointments toward utilization
    pub utilization_by_date: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            working_day: WorkingDay::default(),
            slot_minutes: DEFAULT_SLOT_MINUTES,
            conflict_policy: ConflictPolicy::Advisory,
            utilization_by_date: false,
        }
    }
}

impl ScheduleConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: ScheduleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.working_day.closes_at <= self.working_day.opens_at {
            return Err(ConfigError::WorkingDay(format!(
                "closes at {} but opens at {}",
                self.working_day.closes_at, self.working_day.opens_at
            )));
        }
        if self.slot_minutes == 0 {
            return Err(ConfigError::ZeroSlot);
        }
        Ok(())
    }

    pub fn working_day_minutes(&self) -> u32 {
        self.working_day.minutes()
    }
}
