//! Capacity ledger for ferias, citas and voluntarios
//!
//! - **manager**: `LedgerManager`, command processing and event generation
//! - **storage**: redb-backed collection store and event journal
//! - **actions**: one `CommandHandler` per command type
//! - **appliers**: pure `EventApplier`s folding events into `LedgerState`
//!
//! # Architecture
//!
//! ```text
//! LedgerCommand → LedgerManager → CommandAction → LedgerEvent(s)
//!                      ↓                               ↓
//!               working LedgerState ← EventAction (applier)
//!                      ↓
//!            CollectionStore (one redb write transaction)
//!                      ↓
//!                  Broadcast
//! ```
//!
//! Every fair keeps `cupos_disponibles == cupos_totales - reservados`,
//! where `reservados` is the number of citas pointing at it. Booking floors
//! the counter at 0; removing a cita adds the seat back without a cap.

pub mod actions;
pub mod appliers;
pub mod id;
pub mod manager;
pub mod seed;
pub mod state;
pub mod storage;
pub mod traits;

// Re-exports
pub use id::{IdGenerator, SequentialIdGenerator, SnowflakeIdGenerator};
pub use manager::{LedgerManager, ManagerError, ManagerResult};
pub use state::LedgerState;
pub use storage::{Collection, CollectionStore, StorageError};

// Re-export shared types for convenience
pub use shared::ledger::{
    CapacityDrift, CommandError, CommandErrorCode, CommandResponse, EventPayload, LedgerCommand,
    LedgerCommandPayload, LedgerEvent, LedgerEventType,
};
