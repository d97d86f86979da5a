//! Capacity ledger command/event types
//!
//! - Commands: requests from the API layer to change fairs, appointments or volunteers
//! - Events: immutable facts recorded after a command is accepted
//!
//! The ledger itself (validation, appliers, persistence) lives in feria-server.

pub mod command;
pub mod event;
pub mod types;

// Re-exports
pub use command::{LedgerCommand, LedgerCommandPayload};
pub use event::{EventPayload, LedgerEvent, LedgerEventType};
pub use types::*;
