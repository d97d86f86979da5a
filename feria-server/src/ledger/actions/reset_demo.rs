//! ResetDemo command handler

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{EventPayload, LedgerEvent};

/// ResetDemo action
///
/// Replaces all three collections with the bundled fixtures. The fixtures
/// travel inside the event so replaying the journal does not depend on the
/// binary that wrote it.
#[derive(Debug, Clone)]
pub struct ResetDemoAction;

impl CommandHandler for ResetDemoAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let fixtures = ctx.fixtures();
        let event = LedgerEvent::new(
            ctx.next_sequence(),
            metadata.command_id.clone(),
            EventPayload::DemoReset {
                ferias: fixtures.ferias.clone(),
                citas: fixtures.citas.clone(),
                voluntarios: fixtures.voluntarios.clone(),
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
    fn test_reset_carries_fixtures() {
        let current = state_with(vec![feria(9, 1, 1)], vec![]);
        let fixtures = state_with(vec![feria(1, 50, 47)], vec![cita(2, 1), cita(3, 1)]);
        let ids = ids();
        let mut ctx = CommandContext::new(&current, &ids, &fixtures, 0);

        let events = ResetDemoAction.execute(&mut ctx, &metadata()).unwrap();
        let EventPayload::DemoReset { ferias, citas, .. } = &events[0].payload else {
            panic!("expected DemoReset");
        };
        assert_eq!(ferias.len(), 1);
        assert_eq!(ferias[0].id, 1);
        assert_eq!(citas.len(), 2);
    }
}
