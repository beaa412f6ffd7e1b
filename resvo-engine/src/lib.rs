//! Resvo occupancy engine
//!
//! Pure computation over in-memory reservation snapshots: per-day,
//! per-service capacity, multi-day statistics, and list filtering.
//! Fetching reservations and persisting edits belong to the caller;
//! every function here is a deterministic transformation of its inputs.
//! "Today" is always passed in, never read from the system clock, so the
//! whole engine stays testable with fixed dates.

pub mod capacity;
pub mod config;
pub mod query;
pub mod stats;
pub mod utils;

// Re-exports
pub use capacity::{
    CapacityColor, CapacityStatus, capacity_status, compute_capacity, reservations_for_day_service,
};
pub use config::EngineConfig;
pub use query::{DateRange, ReservationFilters, filter_and_sort};
pub use stats::{
    DailyStats, DayCount, PeriodStats, QuickStats, TopDay, WeekdayAverage, daily_stats,
    period_stats, quick_stats, reservations_by_day, reservations_by_day_of_week, top_days,
};
pub use utils::{AppError, AppResult};
