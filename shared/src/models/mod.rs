//! Data models
//!
//! Shared between feria-server and its clients (via API).
//! All IDs are `i64` (snowflake or sequential, see `IdGenerator`).
//! Field names follow the JSON fixtures the collections are seeded from.

pub mod cita;
pub mod feria;
pub mod voluntario;

// Re-exports
pub use cita::*;
pub use feria::*;
pub use voluntario::*;
