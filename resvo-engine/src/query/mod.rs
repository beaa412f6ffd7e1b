//! Reservation Filter / Query Layer
//!
//! In-memory filtering and sorting for the browsing views. Unlike the
//! statistics layer, searches and lists show every status including
//! cancelled; hiding cancelled bookings is a statistics rule, not a
//! browsing rule.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{Reservation, ReservationStatus, ServiceType};

use crate::utils::time;

#[cfg(test)]
mod tests;

/// Named date-range shortcuts offered by the list views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Today,
    Tomorrow,
    /// Saturday and Sunday of the current Monday-anchored week,
    /// not a rolling next-48-hours window
    ThisWeekend,
    /// Monday through Sunday of the current week
    ThisWeek,
    ThisMonth,
    #[default]
    All,
}

impl DateRange {
    /// Concrete inclusive date bounds, relative to the injected `today`.
    /// `All` imposes no bound.
    pub fn resolve(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DateRange::Today => Some((today, today)),
            DateRange::Tomorrow => {
                let tomorrow = today + Duration::days(1);
                Some((tomorrow, tomorrow))
            }
            DateRange::ThisWeekend => {
                let monday = time::start_of_week(today);
                Some((monday + Duration::days(5), monday + Duration::days(6)))
            }
            DateRange::ThisWeek => {
                Some((time::start_of_week(today), time::end_of_week(today)))
            }
            DateRange::ThisMonth => {
                Some((time::start_of_month(today), time::end_of_month(today)))
            }
            DateRange::All => None,
        }
    }
}

/// Composable list filters; unset criteria match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationFilters {
    /// Case-insensitive substring match against customer name, phone
    /// and email; a reservation matches if ANY field contains the query
    pub search: Option<String>,
    pub service_type: Option<ServiceType>,
    pub status: Option<ReservationStatus>,
    #[serde(default)]
    pub date_range: DateRange,
}

fn matches_search(reservation: &Reservation, query: &str) -> bool {
    let query = query.to_lowercase();
    reservation.customer_name.to_lowercase().contains(&query)
        || reservation.customer_phone.contains(&query)
        || reservation
            .customer_email
            .as_ref()
            .is_some_and(|email| email.to_lowercase().contains(&query))
}

/// Apply all set filters (AND-combined) and sort by ascending date,
/// then ascending time. The lexicographic time comparison is valid
/// because times are zero-padded "HH:MM".
pub fn filter_and_sort(
    reservations: &[Reservation],
    filters: &ReservationFilters,
    today: NaiveDate,
) -> Vec<Reservation> {
    let bounds = filters.date_range.resolve(today);

    let mut selected: Vec<Reservation> = reservations
        .iter()
        .filter(|r| {
            if let Some(query) = &filters.search
                && !query.is_empty()
                && !matches_search(r, query)
            {
                return false;
            }
            if let Some(service) = filters.service_type
                && r.service_type != service
            {
                return false;
            }
            if let Some(status) = filters.status
                && r.status != status
            {
                return false;
            }
            if let Some((start, end)) = bounds
                && (r.date < start || r.date > end)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    selected.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    selected
}
