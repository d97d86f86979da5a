//! DemoReset event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// DemoReset applier - replaces every collection
pub struct DemoResetApplier;

impl EventApplier for DemoResetApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::DemoReset {
            ferias,
            citas,
            voluntarios,
        } = &event.payload
        {
            *state = LedgerState {
                ferias: ferias.clone(),
                citas: citas.clone(),
                voluntarios: voluntarios.clone(),
            };
        }
    }
}
