use std::sync::Arc;

use crate::core::{Config, Result};
use crate::ledger::LedgerManager;

/// Shared application state
///
/// Cheap to clone; handlers receive it through axum's `State` extractor.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | ledger | Capacity ledger over the collection store |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub ledger: Arc<LedgerManager>,
}

impl ServerState {
    /// Build the state around an existing ledger (tests)
    pub fn with_ledger(config: Config, ledger: Arc<LedgerManager>) -> Self {
        Self { config, ledger }
    }

    /// Create the work directory and open the store
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db_path = config.db_path();
        tracing::info!(path = %db_path.display(), "Opening collection store");
        let ledger = LedgerManager::open(&db_path)?;

        Ok(Self::with_ledger(config.clone(), Arc::new(ledger)))
    }

    /// Log every committed event on the audit target
    ///
    /// Runs until the ledger is dropped.
    pub fn start_background_tasks(&self) {
        let mut rx = self.ledger.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        tracing::info!(
                            target: "audit",
                            sequence = event.sequence,
                            event_type = %event.event_type,
                            command_id = %event.command_id,
                            "Ledger event committed"
                        );
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Ledger event listener lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}
