use super::super::storage::StorageError;
use super::super::traits::LedgerError;
use shared::ledger::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Fixture error: {0}")]
    Fixtures(#[from] serde_json::Error),

    #[error("Feria no encontrada: {0}")]
    FeriaNotFound(i64),

    #[error("Los cupos totales no pueden ser negativos.")]
    NegativeCapacity,

    #[error("No puedes reducir el total a {requested}. Ya hay {reservados} cupos reservados.")]
    CapacityBelowReserved { requested: i32, reservados: i32 },

    #[error("{0}")]
    Validation(String),
}

/// Map a storage failure to an error code (the client localizes it)
fn classify_storage_error(e: &StorageError) -> CommandErrorCode {
    if let StorageError::Serialization(_) = e {
        return CommandErrorCode::InternalError;
    }

    // redb errors are classified by message
    let err_str = e.to_string().to_lowercase();

    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return CommandErrorCode::StorageFull;
    }

    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return CommandErrorCode::StorageCorrupted;
    }

    // Database/Transaction/Table/Storage/Commit errors
    CommandErrorCode::SystemBusy
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let message = err.to_string();
        let code = match err {
            ManagerError::Storage(e) => {
                let code = classify_storage_error(&e);
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                code
            }
            ManagerError::Fixtures(e) => {
                tracing::error!(error = %e, "Bundled fixtures could not be parsed");
                CommandErrorCode::InternalError
            }
            ManagerError::FeriaNotFound(_) => CommandErrorCode::FeriaNotFound,
            ManagerError::NegativeCapacity => CommandErrorCode::NegativeCapacity,
            ManagerError::CapacityBelowReserved { .. } => CommandErrorCode::CapacityBelowReserved,
            ManagerError::Validation(_) => CommandErrorCode::ValidationFailed,
        };
        CommandError::new(code, message)
    }
}

impl From<LedgerError> for ManagerError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::FeriaNotFound(id) => ManagerError::FeriaNotFound(id),
            LedgerError::NegativeCapacity => ManagerError::NegativeCapacity,
            LedgerError::CapacityBelowReserved {
                requested,
                reservados,
            } => ManagerError::CapacityBelowReserved {
                requested,
                reservados,
            },
            LedgerError::Validation(msg) => ManagerError::Validation(msg),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
