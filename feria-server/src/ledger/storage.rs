//! redb-based collection store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `collections` | namespace (`aba_ferias`, `aba_citas`, `aba_voluntarios`) | JSON array | Current collections |
//! | `ledger_events` | `sequence` | `LedgerEvent` | Journal (append-only) |
//! | `sequence_counter` | `"seq"` | `u64` | Last journal sequence |
//!
//! Every accepted command rewrites the collections it touched and appends
//! its events in a single write transaction.

use redb::{
    Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ledger::LedgerEvent;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::state::LedgerState;

/// Table for collections: key = namespace, value = JSON-serialized array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Table for the event journal: key = sequence, value = JSON-serialized LedgerEvent
const EVENTS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("ledger_events");

/// Table for sequence counter: key = "seq", value = u64
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence_counter");

const SEQUENCE_KEY: &str = "seq";

/// The three persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Ferias,
    Citas,
    Voluntarios,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Ferias, Collection::Citas, Collection::Voluntarios];

    /// Storage key of the collection
    pub const fn namespace(&self) -> &'static str {
        match self {
            Collection::Ferias => "aba_ferias",
            Collection::Citas => "aba_citas",
            Collection::Voluntarios => "aba_voluntarios",
        }
    }

    /// Short name used in routes and export file names
    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Ferias => "ferias",
            Collection::Citas => "citas",
            Collection::Voluntarios => "voluntarios",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Collection store backed by redb
#[derive(Clone)]
pub struct CollectionStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore").finish_non_exhaustive()
    }
}

impl CollectionStore {
    /// Open or create the database at the given path
    ///
    /// redb commits are durable once `commit()` returns, so a crash between
    /// two commands never leaves a half-written collection behind.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, demos)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
            let _ = write_txn.open_table(EVENTS_TABLE)?;
            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(SEQUENCE_KEY)?.is_none() {
                seq_table.insert(SEQUENCE_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Collections ==========

    /// Read one collection; `None` when the namespace was never written
    pub fn read_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> StorageResult<Option<Vec<T>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        match table.get(collection.namespace())? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn put_collection<T: Serialize>(
        &self,
        txn: &WriteTransaction,
        collection: Collection,
        items: &[T],
    ) -> StorageResult<()> {
        let mut table = txn.open_table(COLLECTIONS_TABLE)?;
        let value = serde_json::to_vec(items)?;
        table.insert(collection.namespace(), value.as_slice())?;
        Ok(())
    }

    /// Write one collection from `state` (within transaction)
    pub fn write_collection(
        &self,
        txn: &WriteTransaction,
        collection: Collection,
        state: &LedgerState,
    ) -> StorageResult<()> {
        match collection {
            Collection::Ferias => self.put_collection(txn, collection, &state.ferias),
            Collection::Citas => self.put_collection(txn, collection, &state.citas),
            Collection::Voluntarios => self.put_collection(txn, collection, &state.voluntarios),
        }
    }

    /// Load all collections, seeding any missing namespace from `fixtures`
    ///
    /// Seeded namespaces are written back so the next start reads them.
    pub fn load_or_seed(&self, fixtures: &LedgerState) -> StorageResult<LedgerState> {
        let mut state = LedgerState::default();
        let mut missing = Vec::new();

        match self.read_collection(Collection::Ferias)? {
            Some(ferias) => state.ferias = ferias,
            None => {
                state.ferias = fixtures.ferias.clone();
                missing.push(Collection::Ferias);
            }
        }
        match self.read_collection(Collection::Citas)? {
            Some(citas) => state.citas = citas,
            None => {
                state.citas = fixtures.citas.clone();
                missing.push(Collection::Citas);
            }
        }
        match self.read_collection(Collection::Voluntarios)? {
            Some(voluntarios) => state.voluntarios = voluntarios,
            None => {
                state.voluntarios = fixtures.voluntarios.clone();
                missing.push(Collection::Voluntarios);
            }
        }

        if !missing.is_empty() {
            let txn = self.begin_write()?;
            for collection in &missing {
                self.write_collection(&txn, *collection, &state)?;
            }
            txn.commit()?;
            tracing::info!(
                seeded = ?missing.iter().map(|c| c.namespace()).collect::<Vec<_>>(),
                "Seeded collections from fixtures"
            );
        }

        Ok(state)
    }

    // ========== Journal ==========

    /// Store an event (within transaction)
    pub fn store_event(&self, txn: &WriteTransaction, event: &LedgerEvent) -> StorageResult<()> {
        let mut table = txn.open_table(EVENTS_TABLE)?;
        let value = serde_json::to_vec(event)?;
        table.insert(event.sequence, value.as_slice())?;
        Ok(())
    }

    /// Events with a sequence greater than `since_sequence`, in order
    pub fn get_events_since(&self, since_sequence: u64) -> StorageResult<Vec<LedgerEvent>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EVENTS_TABLE)?;

        let mut events = Vec::new();
        for result in table.range((since_sequence + 1)..)? {
            let (_key, value) = result?;
            events.push(serde_json::from_slice(value.value())?);
        }
        Ok(events)
    }

    // ========== Sequence Operations ==========

    /// Get current sequence (read-only)
    pub fn get_current_sequence(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SEQUENCE_TABLE)?;
        Ok(table
            .get(SEQUENCE_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    /// Set sequence number (within transaction)
    pub fn set_sequence(&self, txn: &WriteTransaction, sequence: u64) -> StorageResult<()> {
        let mut table = txn.open_table(SEQUENCE_TABLE)?;
        table.insert(SEQUENCE_KEY, sequence)?;
        Ok(())
    }
}
