//! Command results shared by the ledger and its callers

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Response to a ledger command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// ID of the entity created or touched (absent for no-ops and resets)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, entity_id: Option<i64>) -> Self {
        Self {
            command_id,
            success: true,
            entity_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            entity_id: None,
            error: Some(error),
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    ValidationFailed,
    /// `cupos_totales < 0` (validation failure)
    NegativeCapacity,
    /// New total below seats already reserved (validation failure)
    CapacityBelowReserved,
    FeriaNotFound,
    InternalError,
    // Storage errors (maps to ErrorCode 94xx)
    StorageFull,
    StorageCorrupted,
    SystemBusy,
}

impl From<CommandErrorCode> for ErrorCode {
    fn from(code: CommandErrorCode) -> Self {
        match code {
            CommandErrorCode::ValidationFailed => ErrorCode::ValidationFailed,
            CommandErrorCode::NegativeCapacity => ErrorCode::NegativeCapacity,
            CommandErrorCode::CapacityBelowReserved => ErrorCode::CapacityBelowReserved,
            CommandErrorCode::FeriaNotFound => ErrorCode::FeriaNotFound,
            CommandErrorCode::InternalError => ErrorCode::InternalError,
            CommandErrorCode::StorageFull => ErrorCode::StorageFull,
            CommandErrorCode::StorageCorrupted => ErrorCode::StorageCorrupted,
            CommandErrorCode::SystemBusy => ErrorCode::SystemBusy,
        }
    }
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        AppError::with_message(err.code.into(), err.message)
    }
}

/// Seat accounting mismatch found by the capacity check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapacityDrift {
    pub feria_id: i64,
    pub cupos_totales: i32,
    pub cupos_disponibles: i32,
    /// Appointments currently referencing the fair
    pub citas: i32,
    /// `cupos_totales - citas`, floored at 0
    pub expected_disponibles: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_into_app_error() {
        let err = CommandError::new(
            CommandErrorCode::CapacityBelowReserved,
            "No puedes reducir el total a 2. Ya hay 3 cupos reservados.",
        );
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::CapacityBelowReserved);
        assert_eq!(
            app.message,
            "No puedes reducir el total a 2. Ya hay 3 cupos reservados."
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&CommandErrorCode::NegativeCapacity).unwrap();
        assert_eq!(json, "\"NEGATIVE_CAPACITY\"");
    }

    #[test]
    fn test_response_skips_empty_fields() {
        let resp = CommandResponse::success("c1".to_string(), None);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("entity_id").is_none());
        assert!(json.get("error").is_none());
    }
}
