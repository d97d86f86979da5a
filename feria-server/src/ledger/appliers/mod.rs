//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

mod cita_added;
mod cita_removed;
mod demo_reset;
mod feria_created;
mod feria_deleted;
mod feria_updated;
mod voluntario_added;
mod voluntario_removed;

pub use cita_added::CitaAddedApplier;
pub use cita_removed::CitaRemovedApplier;
pub use demo_reset::DemoResetApplier;
pub use feria_created::FeriaCreatedApplier;
pub use feria_deleted::FeriaDeletedApplier;
pub use feria_updated::FeriaUpdatedApplier;
pub use voluntario_added::VoluntarioAddedApplier;
pub use voluntario_removed::VoluntarioRemovedApplier;

/// EventAction enum - dispatches to concrete applier implementations
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    FeriaCreated(FeriaCreatedApplier),
    FeriaUpdated(FeriaUpdatedApplier),
    FeriaDeleted(FeriaDeletedApplier),
    CitaAdded(CitaAddedApplier),
    CitaRemoved(CitaRemovedApplier),
    VoluntarioAdded(VoluntarioAddedApplier),
    VoluntarioRemoved(VoluntarioRemovedApplier),
    DemoReset(DemoResetApplier),
}

/// Convert LedgerEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&LedgerEvent> for EventAction {
    fn from(event: &LedgerEvent) -> Self {
        match &event.payload {
            EventPayload::FeriaCreated { .. } => EventAction::FeriaCreated(FeriaCreatedApplier),
            EventPayload::FeriaUpdated { .. } => EventAction::FeriaUpdated(FeriaUpdatedApplier),
            EventPayload::FeriaDeleted { .. } => EventAction::FeriaDeleted(FeriaDeletedApplier),
            EventPayload::CitaAdded { .. } => EventAction::CitaAdded(CitaAddedApplier),
            EventPayload::CitaRemoved { .. } => EventAction::CitaRemoved(CitaRemovedApplier),
            EventPayload::VoluntarioAdded { .. } => {
                EventAction::VoluntarioAdded(VoluntarioAddedApplier)
            }
            EventPayload::VoluntarioRemoved { .. } => {
                EventAction::VoluntarioRemoved(VoluntarioRemovedApplier)
            }
            EventPayload::DemoReset { .. } => EventAction::DemoReset(DemoResetApplier),
        }
    }
}

/// Fold a batch of events into `state` in order
pub fn apply_all(state: &mut LedgerState, events: &[LedgerEvent]) {
    for event in events {
        EventAction::from(event).apply(state, event);
    }
}
