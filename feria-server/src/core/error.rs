use crate::ledger::ManagerError;
use thiserror::Error;

/// Startup and serving errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] ManagerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
