//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata, LedgerError};
use shared::ledger::{LedgerCommand, LedgerCommandPayload, LedgerEvent};

mod add_cita;
mod add_voluntario;
mod create_feria;
mod delete_feria;
mod remove_cita;
mod remove_voluntario;
mod reset_demo;
mod update_feria;

pub use add_cita::AddCitaAction;
pub use add_voluntario::AddVoluntarioAction;
pub use create_feria::CreateFeriaAction;
pub use delete_feria::DeleteFeriaAction;
pub use remove_cita::RemoveCitaAction;
pub use remove_voluntario::RemoveVoluntarioAction;
pub use reset_demo::ResetDemoAction;
pub use update_feria::UpdateFeriaAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    CreateFeria(CreateFeriaAction),
    UpdateFeria(UpdateFeriaAction),
    DeleteFeria(DeleteFeriaAction),
    AddCita(AddCitaAction),
    RemoveCita(RemoveCitaAction),
    AddVoluntario(AddVoluntarioAction),
    RemoveVoluntario(RemoveVoluntarioAction),
    ResetDemo(ResetDemoAction),
}

/// Manual implementation of CommandHandler for CommandAction
impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        match self {
            CommandAction::CreateFeria(action) => action.execute(ctx, metadata),
            CommandAction::UpdateFeria(action) => action.execute(ctx, metadata),
            CommandAction::DeleteFeria(action) => action.execute(ctx, metadata),
            CommandAction::AddCita(action) => action.execute(ctx, metadata),
            CommandAction::RemoveCita(action) => action.execute(ctx, metadata),
            CommandAction::AddVoluntario(action) => action.execute(ctx, metadata),
            CommandAction::RemoveVoluntario(action) => action.execute(ctx, metadata),
            CommandAction::ResetDemo(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert LedgerCommand to CommandAction
///
/// This is the ONLY place with a match on LedgerCommandPayload.
impl From<&LedgerCommand> for CommandAction {
    fn from(cmd: &LedgerCommand) -> Self {
        match &cmd.payload {
            LedgerCommandPayload::CreateFeria { feria } => {
                CommandAction::CreateFeria(CreateFeriaAction {
                    feria: feria.clone(),
                })
            }
            LedgerCommandPayload::UpdateFeria { feria_id, changes } => {
                CommandAction::UpdateFeria(UpdateFeriaAction {
                    feria_id: *feria_id,
                    changes: changes.clone(),
                })
            }
            LedgerCommandPayload::DeleteFeria { feria_id } => {
                CommandAction::DeleteFeria(DeleteFeriaAction {
                    feria_id: *feria_id,
                })
            }
            LedgerCommandPayload::AddCita { cita } => CommandAction::AddCita(AddCitaAction {
                cita: cita.clone(),
            }),
            LedgerCommandPayload::RemoveCita { cita_id } => {
                CommandAction::RemoveCita(RemoveCitaAction { cita_id: *cita_id })
            }
            LedgerCommandPayload::AddVoluntario { voluntario } => {
                CommandAction::AddVoluntario(AddVoluntarioAction {
                    voluntario: voluntario.clone(),
                })
            }
            LedgerCommandPayload::RemoveVoluntario { voluntario_id } => {
                CommandAction::RemoveVoluntario(RemoveVoluntarioAction {
                    voluntario_id: *voluntario_id,
                })
            }
            LedgerCommandPayload::ResetDemo {} => CommandAction::ResetDemo(ResetDemoAction),
        }
    }
}
