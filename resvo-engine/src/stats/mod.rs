//! Daily / Period Stats Aggregator
//!
//! Rolls raw reservation sets into chart-ready statistics. Every figure
//! here excludes cancelled reservations (via
//! [`Reservation::counts_for_stats`]) and treats date ranges as
//! inclusive on both ends; the raw browsing layer in [`crate::query`]
//! deliberately does neither.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::{Reservation, ReservationStatus, RestaurantSettings, ServiceType};

use crate::capacity::{CapacityStatus, capacity_status};
use crate::utils::time;


/// Round an average to one decimal place, half away from zero
fn round_1dp(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

fn in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

// ============================================================================
// Daily stats
// ============================================================================

/// One service period of a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDayStats {
    pub count: u32,
    pub guests: u32,
    pub capacity: CapacityStatus,
}

/// Occupancy summary for one day, split by service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub lunch: ServiceDayStats,
    pub dinner: ServiceDayStats,
    pub total_count: u32,
    pub total_guests: u32,
}

/// Summarize one day's reservations (the slice is already day-filtered)
/// against the per-service ceilings.
pub fn daily_stats(day_reservations: &[Reservation], settings: &RestaurantSettings) -> DailyStats {
    let service = |wanted: ServiceType| -> ServiceDayStats {
        let mut count = 0;
        let mut guests = 0;
        for r in day_reservations
            .iter()
            .filter(|r| r.service_type == wanted && r.counts_for_stats())
        {
            count += 1;
            guests += r.num_guests;
        }
        ServiceDayStats {
            count,
            guests,
            capacity: capacity_status(guests, settings.ceiling_for(wanted), &settings.thresholds),
        }
    };

    let lunch = service(ServiceType::Lunch);
    let dinner = service(ServiceType::Dinner);
    DailyStats {
        total_count: lunch.count + dinner.count,
        total_guests: lunch.guests + dinner.guests,
        lunch,
        dinner,
    }
}

// ============================================================================
// Time series
// ============================================================================

/// Reservation counts for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub lunch_count: u32,
    pub dinner_count: u32,
}

/// Dense daily series over `[start, end]` inclusive, ascending.
///
/// Days without reservations still appear with zero counts, so the
/// result plots directly without gap handling.
pub fn reservations_by_day(
    reservations: &[Reservation],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DayCount> {
    let mut counts: HashMap<NaiveDate, (u32, u32)> = HashMap::new();
    for r in reservations.iter().filter(|r| r.counts_for_stats()) {
        if !in_range(r.date, start, end) {
            continue;
        }
        let entry = counts.entry(r.date).or_default();
        match r.service_type {
            ServiceType::Lunch => entry.0 += 1,
            ServiceType::Dinner => entry.1 += 1,
        }
    }

    let mut series = Vec::new();
    let mut day = start;
    while day <= end {
        let (lunch_count, dinner_count) = counts.get(&day).copied().unwrap_or_default();
        series.push(DayCount {
            date: day,
            lunch_count,
            dinner_count,
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}

/// Average reservation counts for one weekday (Monday-first index)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayAverage {
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u32,
    pub lunch_avg: f64,
    pub dinner_avg: f64,
}

/// Per-weekday averages: sums divided by the number of DISTINCT calendar
/// dates seen for that weekday, so three Saturdays with 6 dinners total
/// average 2, regardless of how many reservations the set holds.
pub fn reservations_by_day_of_week(reservations: &[Reservation]) -> Vec<WeekdayAverage> {
    let mut sums = [(0u32, 0u32); 7];
    let mut dates: [HashSet<NaiveDate>; 7] = Default::default();

    for r in reservations.iter().filter(|r| r.counts_for_stats()) {
        let idx = time::weekday_index(r.date) as usize;
        match r.service_type {
            ServiceType::Lunch => sums[idx].0 += 1,
            ServiceType::Dinner => sums[idx].1 += 1,
        }
        dates[idx].insert(r.date);
    }

    (0..7)
        .map(|idx| {
            let occurrences = dates[idx].len() as f64;
            let (lunch, dinner) = sums[idx];
            WeekdayAverage {
                weekday: idx as u32,
                lunch_avg: if occurrences > 0.0 {
                    lunch as f64 / occurrences
                } else {
                    0.0
                },
                dinner_avg: if occurrences > 0.0 {
                    dinner as f64 / occurrences
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// One of the busiest days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// The `n` days with the most reservations, busiest first. Equal counts
/// order by date ascending so the result is deterministic.
pub fn top_days(reservations: &[Reservation], n: usize) -> Vec<TopDay> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for r in reservations.iter().filter(|r| r.counts_for_stats()) {
        *counts.entry(r.date).or_default() += 1;
    }

    let mut days: Vec<TopDay> = counts
        .into_iter()
        .map(|(date, count)| TopDay { date, count })
        .collect();
    days.sort_by(|a, b| b.count.cmp(&a.count).then(a.date.cmp(&b.date)));
    days.truncate(n);
    days
}

// ============================================================================
// Period totals
// ============================================================================

/// Single-pass totals over a date range
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodStats {
    pub total_reservations: u32,
    pub total_guests: u32,
    pub lunch_count: u32,
    pub lunch_guests: u32,
    pub dinner_count: u32,
    pub dinner_guests: u32,
    pub confirmed_count: u32,
    pub pending_count: u32,
    pub completed_count: u32,
    /// Rounded to one decimal place; 0 when the period is empty
    pub avg_guests_per_reservation: f64,
}

/// Fold the reservations inside `[start, end]` into period totals.
pub fn period_stats(reservations: &[Reservation], start: NaiveDate, end: NaiveDate) -> PeriodStats {
    let mut stats = PeriodStats::default();

    for r in reservations
        .iter()
        .filter(|r| r.counts_for_stats() && in_range(r.date, start, end))
    {
        stats.total_reservations += 1;
        stats.total_guests += r.num_guests;
        match r.service_type {
            ServiceType::Lunch => {
                stats.lunch_count += 1;
                stats.lunch_guests += r.num_guests;
            }
            ServiceType::Dinner => {
                stats.dinner_count += 1;
                stats.dinner_guests += r.num_guests;
            }
        }
        match r.status {
            ReservationStatus::Confirmed => stats.confirmed_count += 1,
            ReservationStatus::Pending => stats.pending_count += 1,
            ReservationStatus::Completed => stats.completed_count += 1,
            ReservationStatus::Cancelled => {}
        }
    }

    if stats.total_reservations > 0 {
        stats.avg_guests_per_reservation = round_1dp(
            Decimal::from(stats.total_guests) / Decimal::from(stats.total_reservations),
        );
    }
    stats
}

// ============================================================================
// Dashboard quick stats
// ============================================================================

/// Headline numbers for the reservations dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickStats {
    /// All reservations on file, any status
    pub total: u32,
    /// Active reservations seated today
    pub today: u32,
    /// Active reservations from today onward, not yet completed
    pub upcoming: u32,
    /// Reservations awaiting confirmation, any date
    pub pending: u32,
}

pub fn quick_stats(reservations: &[Reservation], today: NaiveDate) -> QuickStats {
    QuickStats {
        total: reservations.len() as u32,
        today: reservations
            .iter()
            .filter(|r| r.date == today && r.counts_for_stats())
            .count() as u32,
        upcoming: reservations
            .iter()
            .filter(|r| {
                r.date >= today
                    && r.status != ReservationStatus::Cancelled
                    && r.status != ReservationStatus::Completed
            })
            .count() as u32,
        pending: reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Pending)
            .count() as u32,
    }
}
