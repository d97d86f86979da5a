//! FeriaUpdated event applier
//!
//! Replaces the stored fair with the reconciled copy carried by the event.

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// FeriaUpdated applier
pub struct FeriaUpdatedApplier;

impl EventApplier for FeriaUpdatedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::FeriaUpdated { feria, .. } = &event.payload {
            if let Some(existing) = state.feria_mut(feria.id) {
                *existing = feria.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::{feria, state_with};
    use crate::ledger::appliers::test_support::event;

    #[test]
    fn test_replaces_feria() {
        let mut state = state_with(vec![feria(1, 50, 47), feria(2, 10, 10)], vec![]);
        let mut updated = feria(1, 5, 2);
        updated.titulo = "Editada".to_string();

        let e = event(EventPayload::FeriaUpdated {
            feria: updated,
            previous_totales: 50,
            reservados: 3,
        });
        FeriaUpdatedApplier.apply(&mut state, &e);

        let f = state.feria(1).unwrap();
        assert_eq!(f.titulo, "Editada");
        assert_eq!(f.cupos_totales, 5);
        assert_eq!(f.cupos_disponibles, 2);
        assert_eq!(state.feria(2).unwrap().cupos_totales, 10);
    }

    #[test]
    fn test_missing_feria_ignored() {
        let mut state = state_with(vec![], vec![]);
        let e = event(EventPayload::FeriaUpdated {
            feria: feria(1, 5, 5),
            previous_totales: 5,
            reservados: 0,
        });
        FeriaUpdatedApplier.apply(&mut state, &e);
        assert!(state.ferias.is_empty());
    }
}
