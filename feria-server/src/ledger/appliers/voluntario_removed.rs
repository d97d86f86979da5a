//! VoluntarioRemoved event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::ledger::{EventPayload, LedgerEvent};

/// VoluntarioRemoved applier
pub struct VoluntarioRemovedApplier;

impl EventApplier for VoluntarioRemovedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::VoluntarioRemoved { voluntario_id } = &event.payload {
            state.voluntarios.retain(|v| v.id != *voluntario_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Voluntario;

    #[test]
    fn test_removes_only_matching() {
        let make = |id: i64| Voluntario {
            id,
            nombre: format!("Voluntario {id}"),
            email: format!("v{id}@example.com"),
            telefono: "8888-8888".to_string(),
            area_interes: "Logística".to_string(),
            disponibilidad: "Sábados".to_string(),
            experiencia_previa: String::new(),
            fecha_registro: None,
        };
        let mut state = LedgerState {
            voluntarios: vec![make(1), make(2)],
            ..Default::default()
        };
        let e = crate::ledger::appliers::test_support::event(EventPayload::VoluntarioRemoved {
            voluntario_id: 1,
        });
        VoluntarioRemovedApplier.apply(&mut state, &e);

        assert_eq!(state.voluntarios.len(), 1);
        assert_eq!(state.voluntarios[0].id, 2);
    }
}
