//! VoluntarioAdded event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// VoluntarioAdded applier
pub struct VoluntarioAddedApplier;

impl EventApplier for VoluntarioAddedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::VoluntarioAdded { voluntario } = &event.payload {
            state.voluntarios.push(voluntario.clone());
        }
    }
}
