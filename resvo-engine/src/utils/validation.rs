//! Input validation helpers
//!
//! Boundary checks for staff-entered payloads. The engine itself assumes
//! validated records; these helpers are where that assumption is earned.

use shared::{CapacityThresholds, DiningTableCreate, ReservationCreate, RestaurantSettingsUpdate};

use super::{AppError, AppResult, time};

// ── Limits ──────────────────────────────────────────────────────────

/// Customer and restaurant names
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Notes and special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Largest bookable party
pub const MAX_GUESTS: u32 = 50;

/// Largest single-table capacity
pub const MAX_TABLE_CAPACITY: u32 = 20;

// ── Validation helpers ──────────────────────────────────────────────

fn validate_name(value: &str, field: &str) -> AppResult<()> {
    let len = value.trim().chars().count();
    if len < MIN_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at least {MIN_NAME_LEN} characters"
        )));
    }
    if len > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {MAX_NAME_LEN})"
        )));
    }
    Ok(())
}

/// Phone is optional: empty, or 9-12 digits
fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.is_empty() {
        return Ok(());
    }
    let digits = phone.len();
    if !(9..=12).contains(&digits) || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("customer_phone must be 9-12 digits"));
    }
    Ok(())
}

fn validate_optional_note(value: &Option<String>, field: &str) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > MAX_NOTE_LEN
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {MAX_NOTE_LEN})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a new reservation payload
pub fn validate_reservation_create(payload: &ReservationCreate) -> AppResult<()> {
    validate_name(&payload.customer_name, "customer_name")?;
    validate_phone(&payload.customer_phone)?;
    if let Some(email) = &payload.customer_email
        && !email.is_empty()
        && !email.contains('@')
    {
        return Err(AppError::validation("customer_email is not a valid email"));
    }
    time::parse_time_hm(&payload.time)?;
    if payload.num_guests == 0 || payload.num_guests > MAX_GUESTS {
        return Err(AppError::validation(format!(
            "num_guests must be between 1 and {MAX_GUESTS}"
        )));
    }
    validate_optional_note(&payload.notes, "notes")?;
    validate_optional_note(&payload.special_requests, "special_requests")?;
    Ok(())
}

/// Validate a new dining table payload
pub fn validate_dining_table_create(payload: &DiningTableCreate) -> AppResult<()> {
    if payload.table_number.trim().is_empty() {
        return Err(AppError::validation("table_number must not be empty"));
    }
    if payload.capacity == 0 || payload.capacity > MAX_TABLE_CAPACITY {
        return Err(AppError::validation(format!(
            "capacity must be between 1 and {MAX_TABLE_CAPACITY}"
        )));
    }
    if payload.position.trim().is_empty() {
        return Err(AppError::validation("position must not be empty"));
    }
    Ok(())
}

/// Threshold ordering: yellow boundary strictly below red boundary
pub fn validate_thresholds(thresholds: &CapacityThresholds) -> AppResult<()> {
    if thresholds.yellow >= thresholds.red {
        return Err(AppError::validation(
            "yellow threshold must be below red threshold",
        ));
    }
    Ok(())
}

/// Validate a settings update payload
pub fn validate_settings_update(payload: &RestaurantSettingsUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name
        && !name.is_empty()
    {
        validate_name(name, "name")?;
    }
    if payload.max_capacity_lunch == Some(0) || payload.max_capacity_dinner == Some(0) {
        return Err(AppError::validation("capacity ceilings must be at least 1"));
    }
    if let Some(duration) = payload.default_table_duration_min
        && !(30..=300).contains(&duration)
    {
        return Err(AppError::validation(
            "default_table_duration_min must be between 30 and 300",
        ));
    }
    if let Some(thresholds) = &payload.thresholds {
        validate_thresholds(thresholds)?;
    }
    Ok(())
}
