//! Restaurant Settings Model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ServiceType;

/// Opening time range for one service period ("HH:MM", zero-padded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHours {
    pub start: String,
    pub end: String,
}

impl ServiceHours {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Opening configuration for one weekday
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub closed: bool,
    pub lunch: Option<ServiceHours>,
    pub dinner: Option<ServiceHours>,
}

impl DayHours {
    pub fn closed() -> Self {
        Self {
            closed: true,
            lunch: None,
            dinner: None,
        }
    }
}

/// Weekly opening hours, Monday-first (index 0 = Monday, 6 = Sunday)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: [DayHours; 7],
}

impl OpeningHours {
    pub fn for_weekday(&self, weekday: Weekday) -> &DayHours {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Whether a service period is bookable on the given weekday
    pub fn is_open(&self, weekday: Weekday, service: ServiceType) -> bool {
        let day = self.for_weekday(weekday);
        if day.closed {
            return false;
        }
        match service {
            ServiceType::Lunch => day.lunch.is_some(),
            ServiceType::Dinner => day.dinner.is_some(),
        }
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        let standard = DayHours {
            closed: false,
            lunch: Some(ServiceHours::new("12:00", "15:00")),
            dinner: Some(ServiceHours::new("19:00", "23:00")),
        };
        Self {
            days: [
                standard.clone(), // Monday
                standard.clone(), // Tuesday
                DayHours::closed(), // Wednesday (weekly closing day)
                standard.clone(), // Thursday
                standard.clone(), // Friday
                standard.clone(), // Saturday
                standard,         // Sunday
            ],
        }
    }
}

/// Occupancy color thresholds (percentage boundaries)
///
/// One scheme for the whole application:
/// `pct >= red` is red, `pct >= yellow` is yellow, anything below is
/// green. Boundaries belong to the higher-severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityThresholds {
    /// Lower bound of the yellow tier (default 70%)
    pub yellow: u8,
    /// Lower bound of the red tier (default 90%)
    pub red: u8,
}

impl Default for CapacityThresholds {
    fn default() -> Self {
        Self {
            yellow: 70,
            red: 90,
        }
    }
}

/// Restaurant settings entity (singleton per location)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSettings {
    #[serde(default)]
    pub name: String,
    /// Seat ceiling for the lunch service
    pub max_capacity_lunch: u32,
    /// Seat ceiling for the dinner service
    pub max_capacity_dinner: u32,
    /// Expected table turn duration in minutes (display only)
    pub default_table_duration_min: u32,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub thresholds: CapacityThresholds,
}

impl RestaurantSettings {
    /// Capacity ceiling for the given service period
    pub fn ceiling_for(&self, service: ServiceType) -> u32 {
        match service {
            ServiceType::Lunch => self.max_capacity_lunch,
            ServiceType::Dinner => self.max_capacity_dinner,
        }
    }
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_capacity_lunch: 80,
            max_capacity_dinner: 100,
            default_table_duration_min: 120,
            opening_hours: OpeningHours::default(),
            thresholds: CapacityThresholds::default(),
        }
    }
}

/// Update restaurant settings payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantSettingsUpdate {
    pub name: Option<String>,
    pub max_capacity_lunch: Option<u32>,
    pub max_capacity_dinner: Option<u32>,
    pub default_table_duration_min: Option<u32>,
    pub opening_hours: Option<OpeningHours>,
    pub thresholds: Option<CapacityThresholds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_closing_day_is_not_bookable() {
        let hours = OpeningHours::default();
        assert!(hours.is_open(Weekday::Mon, ServiceType::Lunch));
        assert!(!hours.is_open(Weekday::Wed, ServiceType::Dinner));
    }

    #[test]
    fn ceiling_is_per_service() {
        let settings = RestaurantSettings::default();
        assert_eq!(settings.ceiling_for(ServiceType::Lunch), 80);
        assert_eq!(settings.ceiling_for(ServiceType::Dinner), 100);
    }
}
