//! Reservation Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service period of a business day. A day has at most two periods,
/// each with an independent capacity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Lunch,
    Dinner,
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

/// Reservation entity - a booked seating event
///
/// `date` is the calendar day of the seating, with no time-of-day
/// component. `time` ("HH:MM", zero-padded) is kept separately for
/// ordering and display only; it never enters capacity math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Seating time ("HH:MM", zero-padded)
    pub time: String,
    pub service_type: ServiceType,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    /// Party size; contribution to occupancy
    pub num_guests: u32,
    /// Manually assigned table, if any
    pub table_id: Option<Uuid>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
    /// Audit timestamps, owned by the persistence layer
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this reservation counts toward occupancy and statistics.
    ///
    /// Cancelled reservations stay in storage and in raw lists but are
    /// excluded from every capacity/statistics figure.
    pub fn counts_for_stats(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub date: NaiveDate,
    pub time: String,
    pub service_type: ServiceType,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub num_guests: u32,
    pub table_id: Option<Uuid>,
    #[serde(default)]
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub service_type: Option<ServiceType>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub num_guests: Option<u32>,
    pub table_id: Option<Uuid>,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
}

/// Default bookable time slots per service (15-minute grid)
pub const LUNCH_TIME_SLOTS: &[&str] = &[
    "12:00", "12:15", "12:30", "12:45", "13:00", "13:15", "13:30", "13:45", "14:00", "14:15",
    "14:30", "14:45",
];

pub const DINNER_TIME_SLOTS: &[&str] = &[
    "19:00", "19:15", "19:30", "19:45", "20:00", "20:15", "20:30", "20:45", "21:00", "21:15",
    "21:30", "21:45", "22:00", "22:15", "22:30",
];
