//! Engine configuration
//!
//! Baseline settings loaded from the environment. These only seed a
//! [`RestaurantSettings`] value; every engine function still takes its
//! settings as an explicit parameter, so nothing in the computation
//! path reads ambient state.

use shared::{CapacityThresholds, RestaurantSettings};
use tracing::warn;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | RESVO_MAX_CAPACITY_LUNCH | 80 | Lunch seat ceiling |
/// | RESVO_MAX_CAPACITY_DINNER | 100 | Dinner seat ceiling |
/// | RESVO_YELLOW_THRESHOLD | 70 | Yellow occupancy boundary (%) |
/// | RESVO_RED_THRESHOLD | 90 | Red occupancy boundary (%) |
/// | RESVO_LOG_LEVEL | info | Default log level |
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub max_capacity_lunch: u32,
    pub max_capacity_dinner: u32,
    pub thresholds: CapacityThresholds,
    pub log_level: String,
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let mut thresholds = CapacityThresholds {
            yellow: env_u32("RESVO_YELLOW_THRESHOLD", 70).min(u8::MAX as u32) as u8,
            red: env_u32("RESVO_RED_THRESHOLD", 90).min(u8::MAX as u32) as u8,
        };
        if thresholds.yellow >= thresholds.red {
            warn!(
                yellow = thresholds.yellow,
                red = thresholds.red,
                "threshold overrides out of order, falling back to defaults"
            );
            thresholds = CapacityThresholds::default();
        }

        Self {
            max_capacity_lunch: env_u32("RESVO_MAX_CAPACITY_LUNCH", 80),
            max_capacity_dinner: env_u32("RESVO_MAX_CAPACITY_DINNER", 100),
            thresholds,
            log_level: std::env::var("RESVO_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Baseline restaurant settings seeded from this configuration
    pub fn settings(&self) -> RestaurantSettings {
        RestaurantSettings {
            max_capacity_lunch: self.max_capacity_lunch,
            max_capacity_dinner: self.max_capacity_dinner,
            thresholds: self.thresholds,
            ..RestaurantSettings::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_capacity_lunch: 80,
            max_capacity_dinner: 100,
            thresholds: CapacityThresholds::default(),
            log_level: "info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_restaurant() {
        let config = EngineConfig::default();
        assert_eq!(config.max_capacity_lunch, 80);
        assert_eq!(config.max_capacity_dinner, 100);
        assert_eq!(config.thresholds, CapacityThresholds { yellow: 70, red: 90 });

        let settings = config.settings();
        assert_eq!(settings.max_capacity_dinner, 100);
        assert_eq!(settings.default_table_duration_min, 120);
    }
}
