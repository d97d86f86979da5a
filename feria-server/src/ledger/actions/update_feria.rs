//! UpdateFeria command handler
//!
//! Capacity edits are reconciled against the seats already taken:
//! `reservados = cupos_totales - cupos_disponibles` before the edit, and
//! the new availability is `new_total - reservados`. The stored counters
//! are the source of truth here, not a recount of citas.

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};
use shared::models::{FeriaUpdate, clean_requisitos};

/// UpdateFeria action
#[derive(Debug, Clone)]
pub struct UpdateFeriaAction {
    pub feria_id: i64,
    pub changes: FeriaUpdate,
}

impl CommandHandler for UpdateFeriaAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let existing = ctx.load_feria(self.feria_id)?;
        let changes = &self.changes;

        let required = [
            &changes.titulo,
            &changes.fecha,
            &changes.hora,
            &changes.ubicacion,
            &changes.tipo,
        ];
        if required
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| v.trim().is_empty()))
        {
            return Err(LedgerError::Validation(
                "Por favor completa todos los campos requeridos.".to_string(),
            ));
        }

        let reservados = existing.reservados();
        let new_total = changes.cupos_totales.unwrap_or(existing.cupos_totales);
        if new_total < 0 {
            return Err(LedgerError::NegativeCapacity);
        }
        if new_total < reservados {
            return Err(LedgerError::CapacityBelowReserved {
                requested: new_total,
                reservados,
            });
        }
        // reservados < 0 after uncapped seat returns
        let Some(disponibles) = new_total.checked_sub(reservados) else {
            return Err(LedgerError::Validation(
                "Los cupos totales exceden el máximo permitido.".to_string(),
            ));
        };

        let mut feria = existing.clone();
        if let Some(titulo) = &changes.titulo {
            feria.titulo = titulo.clone();
        }
        if let Some(fecha) = &changes.fecha {
            feria.fecha = fecha.clone();
        }
        if let Some(hora) = &changes.hora {
            feria.hora = hora.clone();
        }
        if let Some(ubicacion) = &changes.ubicacion {
            feria.ubicacion = ubicacion.clone();
        }
        if let Some(mapa_url) = &changes.mapa_url {
            feria.mapa_url = Some(mapa_url.clone()).filter(|u| !u.is_empty());
        }
        if let Some(tipo) = &changes.tipo {
            feria.tipo = tipo.clone();
        }
        if let Some(imagen) = &changes.imagen {
            feria.imagen = Some(imagen.clone()).filter(|i| !i.is_empty());
        }
        if let Some(descripcion) = &changes.descripcion {
            feria.descripcion = Some(descripcion.clone()).filter(|d| !d.is_empty());
        }
        if let Some(requisitos) = &changes.requisitos {
            feria.requisitos = clean_requisitos(requisitos.clone());
        }
        if let Some(estado) = &changes.estado {
            feria.estado = estado.clone();
        }
        feria.cupos_totales = new_total;
        feria.cupos_disponibles = disponibles;

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::FeriaUpdated {
                feria,
                previous_totales: existing.cupos_totales,
                reservados,
            },
        );
        Ok(vec![event])
    }
}
