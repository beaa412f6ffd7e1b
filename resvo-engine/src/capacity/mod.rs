//! Capacity Calculator
//!
//! Turns a set of reservations plus a per-service seat ceiling into an
//! occupancy figure with a three-tier color. Callers decide which
//! reservations count (day, service, status); this module only decides
//! what the number means.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{CapacityThresholds, Reservation, ServiceType};

#[cfg(test)]
mod tests;

/// Occupancy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityColor {
    Green,
    Yellow,
    Red,
}

/// Derived occupancy status - computed fresh from its inputs, never
/// persisted or cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStatus {
    /// Seats still free; clamps to 0 when overbooked
    pub available: u32,
    /// The ceiling the percentage is measured against
    pub total: u32,
    /// Rounded occupancy percentage; may exceed 100 when overbooked
    pub percentage: u32,
    pub color: CapacityColor,
}

/// Classify a guest total against a ceiling.
///
/// A zero ceiling reports 0%, not a division error. Boundaries belong
/// to the higher-severity tier: `pct >= red` is red, `pct >= yellow`
/// is yellow.
pub fn capacity_status(
    total_guests: u32,
    ceiling: u32,
    thresholds: &CapacityThresholds,
) -> CapacityStatus {
    let percentage = if ceiling > 0 {
        (total_guests as f64 / ceiling as f64 * 100.0).round() as u32
    } else {
        0
    };

    let color = if percentage >= thresholds.red as u32 {
        CapacityColor::Red
    } else if percentage >= thresholds.yellow as u32 {
        CapacityColor::Yellow
    } else {
        CapacityColor::Green
    };

    CapacityStatus {
        available: ceiling.saturating_sub(total_guests),
        total: ceiling,
        percentage,
        color,
    }
}

/// Compute occupancy for an already-selected reservation set.
///
/// The slice is expected to be prefiltered to one day + service with
/// cancelled reservations removed (see [`reservations_for_day_service`]);
/// guest counts are summed as-is.
pub fn compute_capacity(
    reservations: &[&Reservation],
    ceiling: u32,
    thresholds: &CapacityThresholds,
) -> CapacityStatus {
    let total_guests = reservations.iter().map(|r| r.num_guests).sum();
    capacity_status(total_guests, ceiling, thresholds)
}

/// Select the reservations that occupy seats on one day and service:
/// same calendar day, same service period, not cancelled.
pub fn reservations_for_day_service<'a>(
    reservations: &'a [Reservation],
    date: NaiveDate,
    service: ServiceType,
) -> Vec<&'a Reservation> {
    reservations
        .iter()
        .filter(|r| r.date == date && r.service_type == service && r.counts_for_stats())
        .collect()
}
