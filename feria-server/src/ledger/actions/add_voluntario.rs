//! AddVoluntario command handler

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};
use shared::models::{Voluntario, VoluntarioCreate};
use shared::util::millis_to_rfc3339;

/// AddVoluntario action
#[derive(Debug, Clone)]
pub struct AddVoluntarioAction {
    pub voluntario: VoluntarioCreate,
}

impl CommandHandler for AddVoluntarioAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let input = &self.voluntario;
        let voluntario = Voluntario {
            id: ctx.next_id(),
            nombre: input.nombre.clone(),
            email: input.email.clone(),
            telefono: input.telefono.clone(),
            area_interes: input.area_interes.clone(),
            disponibilidad: input.disponibilidad.clone(),
            experiencia_previa: input.experiencia_previa.clone(),
            fecha_registro: Some(millis_to_rfc3339(metadata.timestamp)),
        };

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::VoluntarioAdded { voluntario },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::*;

    #[test]
    fn test_add_voluntario() {
        let state = state_with(vec![], vec![]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let action = AddVoluntarioAction {
            voluntario: VoluntarioCreate {
                nombre: "Sofía Mora".to_string(),
                email: "sofia@example.com".to_string(),
                telefono: "8700-1234".to_string(),
                area_interes: "Veterinaria".to_string(),
                disponibilidad: "Sábados".to_string(),
                experiencia_previa: String::new(),
            },
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();
        let EventPayload::VoluntarioAdded { voluntario } = &events[0].payload else {
            panic!("expected VoluntarioAdded");
        };
        assert_eq!(voluntario.id, 1000);
        assert_eq!(voluntario.area_interes, "Veterinaria");
        assert_eq!(
            voluntario.fecha_registro.as_deref(),
            Some("2026-01-01T00:00:00.000Z")
        );
    }
}
