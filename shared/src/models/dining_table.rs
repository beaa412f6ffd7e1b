//! Dining Table Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conventional position tags ("interno", "esterno", "veranda");
/// the field itself is freeform to allow custom zones.
pub const TABLE_POSITIONS: &[&str] = &["interno", "esterno", "veranda"];

/// Dining table entity
///
/// Tables are a display/assignment dimension only. Occupancy math never
/// sums table capacities; it uses the restaurant-level per-service
/// ceiling instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: Uuid,
    pub table_number: String,
    pub capacity: u32,
    pub position: String,
    pub is_active: bool,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_number: String,
    pub capacity: u32,
    pub position: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub table_number: Option<String>,
    pub capacity: Option<u32>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
}
