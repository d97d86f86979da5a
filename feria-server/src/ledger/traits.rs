//! Seams between the manager, the actions and the appliers

use enum_dispatch::enum_dispatch;
use thiserror::Error;

use super::appliers::{
    CitaAddedApplier, CitaRemovedApplier, DemoResetApplier, EventAction, FeriaCreatedApplier,
    FeriaDeletedApplier, FeriaUpdatedApplier, VoluntarioAddedApplier, VoluntarioRemovedApplier,
};
use super::id::IdGenerator;
use super::state::LedgerState;
use shared::ledger::LedgerEvent;
use shared::models::{Cita, Feria, Voluntario};

/// Errors raised by actions while validating a command
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Feria no encontrada: {0}")]
    FeriaNotFound(i64),

    #[error("Los cupos totales no pueden ser negativos.")]
    NegativeCapacity,

    #[error("No puedes reducir el total a {requested}. Ya hay {reservados} cupos reservados.")]
    CapacityBelowReserved { requested: i32, reservados: i32 },

    #[error("{0}")]
    Validation(String),
}

/// Per-command data every action receives
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    /// Caller timestamp (Unix milliseconds)
    pub timestamp: i64,
}

/// Read-only view of the ledger handed to an action
///
/// Actions never mutate state; they return events and the manager applies
/// them. Ids and sequence numbers are handed out from here so that a
/// rejected command consumes nothing that is persisted.
pub struct CommandContext<'a> {
    state: &'a LedgerState,
    ids: &'a dyn IdGenerator,
    fixtures: &'a LedgerState,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        state: &'a LedgerState,
        ids: &'a dyn IdGenerator,
        fixtures: &'a LedgerState,
        current_sequence: u64,
    ) -> Self {
        Self {
            state,
            ids,
            fixtures,
            sequence: current_sequence,
        }
    }

    pub fn feria(&self, id: i64) -> Option<&'a Feria> {
        self.state.feria(id)
    }

    pub fn load_feria(&self, id: i64) -> Result<&'a Feria, LedgerError> {
        self.feria(id).ok_or(LedgerError::FeriaNotFound(id))
    }

    pub fn cita(&self, id: i64) -> Option<&'a Cita> {
        self.state.cita(id)
    }

    pub fn voluntario(&self, id: i64) -> Option<&'a Voluntario> {
        self.state.voluntario(id)
    }

    /// Number of citas currently referencing `feria_id`
    pub fn citas_count(&self, feria_id: i64) -> usize {
        self.state.citas_for_feria(feria_id).count()
    }

    /// Bundled demo data, used by reset
    pub fn fixtures(&self) -> &'a LedgerState {
        self.fixtures
    }

    pub fn next_id(&self) -> i64 {
        self.ids.next_id()
    }

    /// Allocate the next journal sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }
}

/// Validates a command against the current state and emits events
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<LedgerEvent>, LedgerError>;
}

/// Folds one event into the state. Must be pure.
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent);
}
