use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance when checking that the quality weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors rejected at configuration construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid probability: {0}")]
    InvalidProbability(String),
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
}

/// Parameters controlling a generation run.
///
/// Per-entity sizes left unset fall back to the base `size`. The quality
/// weights must form a probability distribution; `validate` rejects
/// anything else before generation starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,

    /// Base number of instances per entity kind.
    pub size: u64,
    pub flight_slots_size: Option<u64>,
    pub maintenance_slots_size: Option<u64>,

    pub fleet_size: u64,
    pub personnel_list_size: u64,
    /// Attachments produced per maintenance event or interruption.
    pub max_attach_size: u64,
    /// Upper bound on work packages produced per work order.
    pub max_work_packages: u64,

    /// Probability that a work order is a forecasted order rather than a
    /// technical logbook order.
    pub proba_forecast_order: f64,
    /// Flight-vs-maintenance slot weight carried over from the reference
    /// configuration; the explicit per-kind sizes drive the actual split.
    pub prob_flight_slot: f64,

    /// Longest scheduled flight block, in hours.
    pub max_flight_duration_hours: i64,
    /// Longest scheduled maintenance block, in days.
    pub max_maintenance_slot_days: i64,
    /// Largest departure delay for a non-cancelled flight, in minutes.
    pub max_delay_minutes: i64,
    pub min_passengers: i64,
    pub max_passengers: i64,
    pub min_cabin_crew: i64,
    pub max_cabin_crew: i64,
    pub min_flight_crew: i64,
    pub max_flight_crew: i64,

    pub prob_good: f64,
    pub prob_noisy: f64,
    pub prob_bad: f64,

    pub db_url: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            size: 1000,
            flight_slots_size: None,
            maintenance_slots_size: None,
            fleet_size: 20,
            personnel_list_size: 500,
            max_attach_size: 1,
            max_work_packages: 1,
            proba_forecast_order: 0.5,
            prob_flight_slot: 0.4,
            max_flight_duration_hours: 5,
            max_maintenance_slot_days: 14,
            max_delay_minutes: 40,
            min_passengers: 90,
            max_passengers: 180,
            min_cabin_crew: 3,
            max_cabin_crew: 4,
            min_flight_crew: 2,
            max_flight_crew: 3,
            prob_good: 1.0,
            prob_noisy: 0.0,
            prob_bad: 0.0,
            db_url: None,
        }
    }
}

impl GeneratorConfig {
    pub fn flight_slots_size(&self) -> u64 {
        self.flight_slots_size.unwrap_or(self.size)
    }

    pub fn maintenance_slots_size(&self) -> u64 {
        self.maintenance_slots_size.unwrap_or(self.size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("prob_good", self.prob_good),
            ("prob_noisy", self.prob_noisy),
            ("prob_bad", self.prob_bad),
            ("proba_forecast_order", self.proba_forecast_order),
            ("prob_flight_slot", self.prob_flight_slot),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }

        let sum = self.prob_good + self.prob_noisy + self.prob_bad;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidProbability(format!(
                "quality weights must sum to 1, got {sum}"
            )));
        }

        for (name, min, max) in [
            ("passengers", self.min_passengers, self.max_passengers),
            ("cabin_crew", self.min_cabin_crew, self.max_cabin_crew),
            ("flight_crew", self.min_flight_crew, self.max_flight_crew),
        ] {
            if min < 0 || min > max {
                return Err(ConfigError::InvalidBounds(format!(
                    "{name} bounds must satisfy 0 <= min <= max, got {min}..{max}"
                )));
            }
        }

        for (name, value) in [
            ("max_flight_duration_hours", self.max_flight_duration_hours),
            ("max_maintenance_slot_days", self.max_maintenance_slot_days),
            ("max_delay_minutes", self.max_delay_minutes),
        ] {
            if value < 1 {
                return Err(ConfigError::InvalidBounds(format!(
                    "{name} must be >= 1, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("fleet_size", self.fleet_size),
            ("max_attach_size", self.max_attach_size),
            ("max_work_packages", self.max_work_packages),
        ] {
            if value < 1 {
                return Err(ConfigError::InvalidBounds(format!(
                    "{name} must be >= 1, got {value}"
                )));
            }
        }

        Ok(())
    }
}
