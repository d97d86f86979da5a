//! CitaAdded event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// CitaAdded applier
///
/// Stores the cita and takes one seat from its fair, never below 0.
pub struct CitaAddedApplier;

impl EventApplier for CitaAddedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::CitaAdded { cita } = &event.payload {
            if let Some(feria) = state.feria_mut(cita.id_feria) {
                feria.cupos_disponibles = feria.cupos_disponibles.saturating_sub(1).max(0);
            }
            state.citas.push(cita.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::{cita, feria, state_with};
    use crate::ledger::appliers::test_support::event;

    #[test]
    fn test_decrements_availability() {
        let mut state = state_with(vec![feria(1, 10, 10), feria(2, 10, 10)], vec![]);
        let e = event(EventPayload::CitaAdded { cita: cita(5, 1) });
        CitaAddedApplier.apply(&mut state, &e);

        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 9);
        assert_eq!(state.feria(2).unwrap().cupos_disponibles, 10);
        assert_eq!(state.citas.len(), 1);
    }

    #[test]
    fn test_floors_at_zero() {
        let mut state = state_with(vec![feria(1, 2, 0)], vec![]);
        let e = event(EventPayload::CitaAdded { cita: cita(5, 1) });
        CitaAddedApplier.apply(&mut state, &e);

        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 0);
        assert_eq!(state.citas.len(), 1);
    }

    #[test]
    fn test_unknown_feria_still_stores_cita() {
        let mut state = state_with(vec![feria(1, 2, 2)], vec![]);
        let e = event(EventPayload::CitaAdded { cita: cita(5, 99) });
        CitaAddedApplier.apply(&mut state, &e);

        assert_eq!(state.feria(1).unwrap().cupos_disponibles, 2);
        assert_eq!(state.citas.len(), 1);
    }
}
