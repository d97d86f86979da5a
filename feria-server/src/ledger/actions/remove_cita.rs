//! RemoveCita command handler

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};

/// RemoveCita action
///
/// Removing an unknown cita is a no-op. Otherwise one seat goes back to the
/// referenced fair, without capping at `cupos_totales`.
#[derive(Debug, Clone)]
pub struct RemoveCitaAction {
    pub cita_id: i64,
}

impl CommandHandler for RemoveCitaAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let Some(cita) = ctx.cita(self.cita_id) else {
            tracing::debug!(cita_id = self.cita_id, "Delete of unknown cita ignored");
            return Ok(vec![]);
        };

        let over_total = ctx
            .feria(cita.id_feria)
            .filter(|f| f.cupos_disponibles >= f.cupos_totales);
        if let Some(feria) = over_total {
            tracing::warn!(
                cita_id = cita.id,
                id_feria = feria.id,
                cupos_totales = feria.cupos_totales,
                "Returning a seat pushes availability above total"
            );
        }

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::CitaRemoved {
                cita_id: cita.id,
                id_feria: cita.id_feria,
            },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::actions::test_support::*;

    #[test]
    fn test_remove_cita_emits_event() {
        let state = state_with(vec![feria(1, 10, 9)], vec![cita(5, 1)]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let events = RemoveCitaAction { cita_id: 5 }
            .execute(&mut ctx, &metadata())
            .unwrap();
        let EventPayload::CitaRemoved { cita_id, id_feria } = &events[0].payload else {
            panic!("expected CitaRemoved");
        };
        assert_eq!(*cita_id, 5);
        assert_eq!(*id_feria, 1);
    }

    #[test]
    fn test_remove_unknown_cita_is_noop() {
        let state = state_with(vec![feria(1, 10, 9)], vec![cita(5, 1)]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let events = RemoveCitaAction { cita_id: 6 }
            .execute(&mut ctx, &metadata())
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_remove_orphaned_cita_still_emits() {
        let state = state_with(vec![], vec![cita(5, 77)]);
        let ids = ids();
        let mut ctx = CommandContext::new(&state, &ids, &state, 0);

        let events = RemoveCitaAction { cita_id: 5 }
            .execute(&mut ctx, &metadata())
            .unwrap();
        assert_eq!(events.len(), 1);
    }
}
