//! LedgerManager - command processing and event generation
//!
//! This module handles:
//! - Command validation (via actions)
//! - Event generation with journal sequence numbers
//! - Persistence to redb (one transaction per command)
//! - In-memory state updates
//! - Event broadcasting
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Lock state
//!     ├─ 2. Create CommandContext
//!     ├─ 3. Convert command to action and execute
//!     ├─ 4. Apply events to a working copy via EventApplier
//!     ├─ 5. Persist touched collections, events and sequence
//!     ├─ 6. Commit transaction, swap in the working copy
//!     ├─ 7. Broadcast event(s)
//!     └─ 8. Return response
//! ```
//!
//! A failed commit leaves the in-memory state untouched, so memory and
//! disk never disagree.

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::appliers::apply_all;
use super::id::{IdGenerator, SnowflakeIdGenerator};
use super::seed;
use super::state::LedgerState;
use super::storage::{Collection, CollectionStore, StorageError};
use super::traits::{CommandContext, CommandHandler, CommandMetadata};
use parking_lot::Mutex;
use shared::ledger::{CapacityDrift, CommandResponse, EventPayload, LedgerCommand, LedgerEvent};
use shared::models::{Cita, Feria, Voluntario};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// LedgerManager for command processing
///
/// Commands are serialized through a single mutex; reads clone out of it.
pub struct LedgerManager {
    store: CollectionStore,
    state: Mutex<LedgerState>,
    ids: Arc<dyn IdGenerator>,
    fixtures: LedgerState,
    event_tx: broadcast::Sender<LedgerEvent>,
    /// Unique per process start; lets subscribers detect a restart
    epoch: String,
}

impl std::fmt::Debug for LedgerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerManager")
            .field("store", &self.store)
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl LedgerManager {
    /// Create a manager over `store`, seeding empty collections from the
    /// bundled fixtures
    pub fn new(store: CollectionStore, ids: Arc<dyn IdGenerator>) -> ManagerResult<Self> {
        let fixtures = seed::fixtures()?;
        let state = store.load_or_seed(&fixtures)?;
        ids.observe(state.max_id().max(fixtures.max_id()));

        for drift in state.verify_capacity() {
            tracing::warn!(
                feria_id = drift.feria_id,
                cupos_disponibles = drift.cupos_disponibles,
                expected = drift.expected_disponibles,
                citas = drift.citas,
                "Stored availability does not match citas"
            );
        }

        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            ferias = state.ferias.len(),
            citas = state.citas.len(),
            voluntarios = state.voluntarios.len(),
            "LedgerManager started"
        );

        Ok(Self {
            store,
            state: Mutex::new(state),
            ids,
            fixtures,
            event_tx,
            epoch,
        })
    }

    /// Open the redb file at `db_path` with snowflake ids
    pub fn open(db_path: impl AsRef<Path>) -> ManagerResult<Self> {
        let store = CollectionStore::open(db_path)?;
        Self::new(store, Arc::new(SnowflakeIdGenerator::new()))
    }

    /// In-memory manager (tests, demos)
    pub fn open_in_memory(ids: Arc<dyn IdGenerator>) -> ManagerResult<Self> {
        Self::new(CollectionStore::open_in_memory()?, ids)
    }

    /// Get the server epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to committed events
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.event_tx.subscribe()
    }

    /// Execute a command and broadcast the resulting events
    pub fn execute_command(&self, cmd: LedgerCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and the events
    pub fn execute_command_with_events(
        &self,
        cmd: LedgerCommand,
    ) -> (CommandResponse, Vec<LedgerEvent>) {
        let command_id = cmd.command_id.clone();
        match self.process_command(cmd) {
            Ok((response, events)) => {
                // Broadcast events after successful commit
                for event in &events {
                    if self.event_tx.send(event.clone()).is_err() {
                        tracing::debug!("Event broadcast skipped: no active receivers");
                        break;
                    }
                }
                (response, events)
            }
            Err(err) => (CommandResponse::error(command_id, err.into()), vec![]),
        }
    }

    fn process_command(
        &self,
        cmd: LedgerCommand,
    ) -> ManagerResult<(CommandResponse, Vec<LedgerEvent>)> {
        tracing::debug!(
            command_id = %cmd.command_id,
            action = cmd.payload.action_name(),
            "Processing command"
        );

        let mut state = self.state.lock();
        let current_sequence = self.store.get_current_sequence()?;

        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        };
        let action = CommandAction::from(&cmd);
        let events = {
            let mut ctx =
                CommandContext::new(&state, self.ids.as_ref(), &self.fixtures, current_sequence);
            action.execute(&mut ctx, &metadata)?
        };

        if events.is_empty() {
            return Ok((CommandResponse::success(cmd.command_id, None), events));
        }

        let mut working = state.clone();
        apply_all(&mut working, &events);

        let txn = self.store.begin_write()?;
        for collection in touched_collections(&events) {
            self.store.write_collection(&txn, collection, &working)?;
        }
        for event in &events {
            self.store.store_event(&txn, event)?;
        }
        let last_sequence = events
            .last()
            .map(|e| e.sequence)
            .unwrap_or(current_sequence);
        self.store.set_sequence(&txn, last_sequence)?;
        txn.commit().map_err(StorageError::from)?;

        *state = working;
        if events
            .iter()
            .any(|e| matches!(e.payload, EventPayload::DemoReset { .. }))
        {
            self.ids.observe(state.max_id());
        }

        let entity_id = events.first().and_then(entity_id);
        tracing::info!(
            command_id = %cmd.command_id,
            action = cmd.payload.action_name(),
            sequence = last_sequence,
            entity_id = ?entity_id,
            "Command committed"
        );
        Ok((CommandResponse::success(cmd.command_id, entity_id), events))
    }

    // ========== Queries ==========

    pub fn get_feria(&self, id: i64) -> Option<Feria> {
        self.state.lock().feria(id).cloned()
    }

    pub fn get_cita(&self, id: i64) -> Option<Cita> {
        self.state.lock().cita(id).cloned()
    }

    pub fn get_voluntario(&self, id: i64) -> Option<Voluntario> {
        self.state.lock().voluntario(id).cloned()
    }

    pub fn list_ferias(&self) -> Vec<Feria> {
        self.state.lock().ferias.clone()
    }

    pub fn list_citas(&self) -> Vec<Cita> {
        self.state.lock().citas.clone()
    }

    pub fn list_voluntarios(&self) -> Vec<Voluntario> {
        self.state.lock().voluntarios.clone()
    }

    pub fn citas_for_feria(&self, feria_id: i64) -> Vec<Cita> {
        self.state
            .lock()
            .citas_for_feria(feria_id)
            .cloned()
            .collect()
    }

    /// Copy of all three collections
    pub fn snapshot(&self) -> LedgerState {
        self.state.lock().clone()
    }

    /// Fairs whose stored availability disagrees with their citas
    pub fn verify_capacity(&self) -> Vec<CapacityDrift> {
        self.state.lock().verify_capacity()
    }

    pub fn current_sequence(&self) -> ManagerResult<u64> {
        Ok(self.store.get_current_sequence()?)
    }

    /// Journal entries after `since_sequence`
    pub fn events_since(&self, since_sequence: u64) -> ManagerResult<Vec<LedgerEvent>> {
        Ok(self.store.get_events_since(since_sequence)?)
    }
}

/// Id of the entity an event created or touched
fn entity_id(event: &LedgerEvent) -> Option<i64> {
    match &event.payload {
        EventPayload::FeriaCreated { feria } | EventPayload::FeriaUpdated { feria, .. } => {
            Some(feria.id)
        }
        EventPayload::FeriaDeleted { feria_id, .. } => Some(*feria_id),
        EventPayload::CitaAdded { cita } => Some(cita.id),
        EventPayload::CitaRemoved { cita_id, .. } => Some(*cita_id),
        EventPayload::VoluntarioAdded { voluntario } => Some(voluntario.id),
        EventPayload::VoluntarioRemoved { voluntario_id } => Some(*voluntario_id),
        EventPayload::DemoReset { .. } => None,
    }
}

/// Collections an event batch rewrites
fn touched_collections(events: &[LedgerEvent]) -> Vec<Collection> {
    let mut touched = Vec::new();
    for event in events {
        let collections: &[Collection] = match &event.payload {
            EventPayload::FeriaCreated { .. }
            | EventPayload::FeriaUpdated { .. }
            | EventPayload::FeriaDeleted { .. } => &[Collection::Ferias],
            EventPayload::CitaAdded { .. } | EventPayload::CitaRemoved { .. } => {
                &[Collection::Citas, Collection::Ferias]
            }
            EventPayload::VoluntarioAdded { .. } | EventPayload::VoluntarioRemoved { .. } => {
                &[Collection::Voluntarios]
            }
            EventPayload::DemoReset { .. } => &Collection::ALL,
        };
        for collection in collections {
            if !touched.contains(collection) {
                touched.push(*collection);
            }
        }
    }
    touched
}

#[cfg(test)]
mod tests;
