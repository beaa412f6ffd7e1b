//! Shared types for the Resvo reservation system
//!
//! Data models shared between the occupancy engine and any API/frontend
//! layer. Entities are plain serde structs; derived values (capacity,
//! statistics) live in `resvo-engine` and are never persisted.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::*;
