//! Shared types for the ABA ferias workspace
//!
//! Data models, ledger command/event types, the unified error system and
//! small utilities used by the server and by its tests.

pub mod error;
pub mod ledger;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

// Ledger re-exports (for command dispatch)
pub use ledger::{CommandResponse, LedgerCommand, LedgerCommandPayload, LedgerEvent};
