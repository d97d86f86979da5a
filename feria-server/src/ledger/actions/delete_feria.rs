//! DeleteFeria command handler

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};

/// DeleteFeria action
///
/// Deleting an unknown fair is a no-op. Citas that point at the deleted
/// fair are kept; the event records how many were left behind.
#[derive(Debug, Clone)]
pub struct DeleteFeriaAction {
    pub feria_id: i64,
}

impl CommandHandler for DeleteFeriaAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let Some(feria) = ctx.feria(self.feria_id) else {
            tracing::debug!(feria_id = self.feria_id, "Delete of unknown feria ignored");
            return Ok(vec![]);
        };

        let orphaned_citas = ctx.citas_count(self.feria_id);
        if orphaned_citas > 0 {
            tracing::warn!(
                feria_id = self.feria_id,
                orphaned_citas,
                "Feria deleted with citas still referencing it"
            );
        }

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::FeriaDeleted {
                feria_id: feria.id,
                titulo: feria.titulo.clone(),
                orphaned_citas,
            },
        );
        Ok(vec![event])
    }
}
