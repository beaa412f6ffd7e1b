//! Data models
//!
//! Shared between the occupancy engine and frontend (via API).
//! Dates are true calendar-day values (`chrono::NaiveDate`): any
//! timestamped input is reduced to its local calendar day once, at the
//! boundary, never per comparison site.

pub mod dining_table;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
pub use restaurant::*;
