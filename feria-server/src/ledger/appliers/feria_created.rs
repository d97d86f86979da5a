//! FeriaCreated event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// FeriaCreated applier
pub struct FeriaCreatedApplier;

impl EventApplier for FeriaCreatedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::FeriaCreated { feria } = &event.payload {
            state.ferias.push(feria.clone());
        }
    }
}
