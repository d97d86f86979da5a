//! CitaRemoved event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// CitaRemoved applier
///
/// Drops the cita and gives the seat back. The increment is not capped at
/// `cupos_totales`.
pub struct CitaRemovedApplier;

impl EventApplier for CitaRemovedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::CitaRemoved { cita_id, id_feria } = &event.payload {
            let before = state.citas.len();
            state.citas.retain(|c| c.id != *cita_id);
            if state.citas.len() == before {
                return;
            }
            if let Some(feria) = state.feria_mut(*id_feria) {
                feria.cupos_disponibles = feria.cupos_disponibles.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::{cita, feria, state_with};
    use crate::ledger::appliers::test_support::event;

    #[test]
    fn test_returns_seat() {
        let mut state = state_with(vec![feria(1, 10, 9)], vec![cita(5, 1)]);
        let e = event(EventPayload::CitaRemoved {
            cita_id: 5,
            id_feria: 1,
        });
        CitaRemovedApplier.apply(&mut state, &e);

        assert!(state.citas.is_empty());
        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 10);
    }

    #[test]
    fn test_increment_not_capped() {
        let mut state = state_with(vec![feria(1, 3, 3)], vec![cita(5, 1)]);
        let e = event(EventPayload::CitaRemoved {
            cita_id: 5,
            id_feria: 1,
        });
        CitaRemovedApplier.apply(&mut state, &e);

        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 4);
    }

    #[test]
    fn test_missing_cita_changes_nothing() {
        let mut state = state_with(vec![feria(1, 10, 9)], vec![cita(5, 1)]);
        let e = event(EventPayload::CitaRemoved {
            cita_id: 6,
            id_feria: 1,
        });
        CitaRemovedApplier.apply(&mut state, &e);

        assert_eq!(state.citas.len(), 1);
        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 9);
    }

    #[test]
    fn test_increment_saturates() {
        let mut state = state_with(vec![feria(1, 3, i32::MAX)], vec![cita(5, 1)]);
        let e = event(EventPayload::CitaRemoved {
            cita_id: 5,
            id_feria: 1,
        });
        CitaRemovedApplier.apply(&mut state, &e);

        assert_eq!(state.feria(1).unwrap().cupos_disponibles, i32::MAX);
    }
}
