//! AddCita command handler
//!
//! The ledger records every booking it is given. Whether a fair still
//! accepts bookings is decided by the caller before the command is sent;
//! here the seat counter is only decremented and floored at 0 on apply.

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};
use shared::models::{Cita, CitaCreate, ESTADO_CONFIRMADA};
use shared::util::millis_to_rfc3339;

/// AddCita action
#[derive(Debug, Clone)]
pub struct AddCitaAction {
    pub cita: CitaCreate,
}

impl CommandHandler for AddCitaAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let input = &self.cita;
        match ctx.feria(input.id_feria) {
            None => tracing::warn!(
                id_feria = input.id_feria,
                "Cita registered for unknown feria"
            ),
            Some(feria) if feria.cupos_disponibles <= 0 => tracing::warn!(
                id_feria = input.id_feria,
                "Cita registered for feria without seats; counter stays at 0"
            ),
            Some(_) => {}
        }

        let cita = Cita {
            id: ctx.next_id(),
            id_feria: input.id_feria,
            nombre_dueno: input.nombre_dueno.clone(),
            telefono: input.telefono.clone(),
            nombre_mascota: input.nombre_mascota.clone(),
            especie: input.especie.clone(),
            peso: input.peso.clone(),
            edad: input.edad.clone(),
            fecha_registro: millis_to_rfc3339(metadata.timestamp),
            estado: ESTADO_CONFIRMADA.to_string(),
        };

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::CitaAdded { cita },
        );
        Ok(vec![event])
    }
}
