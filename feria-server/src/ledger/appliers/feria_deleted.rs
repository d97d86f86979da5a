//! FeriaDeleted event applier
//!
//! Citas referencing the fair are left in place.

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// FeriaDeleted applier
pub struct FeriaDeletedApplier;

impl EventApplier for FeriaDeletedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::FeriaDeleted { feria_id, .. } = &event.payload {
            state.ferias.retain(|f| f.id != *feria_id);
        }
    }
}
