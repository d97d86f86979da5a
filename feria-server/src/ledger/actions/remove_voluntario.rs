//! RemoveVoluntario command handler

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};

/// RemoveVoluntario action (unknown ids are ignored)
#[derive(Debug, Clone)]
pub struct RemoveVoluntarioAction {
    pub voluntario_id: i64,
}

impl CommandHandler for RemoveVoluntarioAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        if ctx.voluntario(self.voluntario_id).is_none() {
            return Ok(vec![]);
        }

        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::VoluntarioRemoved {
                voluntario_id: self.voluntario_id,
            },
        );
        Ok(vec![event])
    }
}
