//! CreateFeria command handler
//!
//! New fairs start fully available and open.

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};
use shared::models::{ESTADO_ABIERTA, Feria, FeriaCreate, clean_requisitos};

/// CreateFeria action
#[derive(Debug, Clone)]
pub struct CreateFeriaAction {
    pub feria: FeriaCreate,
}

impl CommandHandler for CreateFeriaAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let input = &self.feria;
        if input.cupos_totales < 0 {
            return Err(LedgerError::NegativeCapacity);
        }

        let feria = Feria {
            id: ctx.next_id(),
            titulo: input.titulo.clone(),
            fecha: input.fecha.clone(),
            hora: input.hora.clone(),
            ubicacion: input.ubicacion.clone(),
            mapa_url: input.mapa_url.clone(),
            tipo: input.tipo.clone(),
            imagen: input.imagen.clone(),
            descripcion: input.descripcion.clone(),
            requisitos: clean_requisitos(input.requisitos.clone()),
            cupos_totales: input.cupos_totales,
            cupos_disponibles: input.cupos_totales,
            estado: ESTADO_ABIERTA.to_string(),
        };

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::FeriaCreated { feria },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::*;

    fn create_input(cupos: i32) -> FeriaCreate {
        FeriaCreate {
            titulo: "Castración Oreamuno".to_string(),
            fecha: "2026-12-12".to_string(),
            hora: "07:00".to_string(),
            ubicacion: "Salón parroquial de San Rafael".to_string(),
            mapa_url: None,
            tipo: "Castración".to_string(),
            imagen: None,
            descripcion: None,
            requisitos: vec!["Ayuno de 8 horas".to_string(), "".to_string()],
            cupos_totales: cupos,
        }
    }

    #[test]
    fn test_create_feria_starts_fully_available() {
        let state = state_with(vec![], vec![]);
        let ids = ids();
        let fixtures = state.clone();
        let mut ctx = CommandContext::new(&state, &ids, &fixtures, 0);

        let action = CreateFeriaAction {
            feria: create_input(50),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sequence, 1);
        let EventPayload::FeriaCreated { feria } = &events[0].payload else {
            panic!("expected FeriaCreated");
        };
        assert_eq!(feria.id, 1000);
        assert_eq!(feria.cupos_totales, 50);
        assert_eq!(feria.cupos_disponibles, 50);
        assert_eq!(feria.estado, "abierta");
        assert_eq!(feria.requisitos, vec!["Ayuno de 8 horas".to_string()]);
    }

    #[test]
    fn test_create_feria_zero_capacity_allowed() {
        let state = state_with(vec![], vec![]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let events = CreateFeriaAction {
            feria: create_input(0),
        }
        .execute(&mut ctx, &metadata())
        .unwrap();
        let EventPayload::FeriaCreated { feria } = &events[0].payload else {
            panic!("expected FeriaCreated");
        };
        assert_eq!(feria.cupos_disponibles, 0);
    }

    #[test]
    fn test_create_feria_rejects_negative_capacity() {
        let state = state_with(vec![], vec![]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let result = CreateFeriaAction {
            feria: create_input(-1),
        }
        .execute(&mut ctx, &metadata());
        assert_eq!(result.unwrap_err(), LedgerError::NegativeCapacity);
        // Nothing allocated
        assert_eq!(ctx.current_sequence(), 0);
    }
}
