//! Ledger commands - requests to mutate the collections

use crate::models::{CitaCreate, FeriaCreate, FeriaUpdate, VoluntarioCreate};
use serde::{Deserialize, Serialize};

/// Ledger command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerCommand {
    /// Command unique ID
    pub command_id: String,
    /// Caller timestamp (Unix milliseconds), used as `fecha_registro`
    pub timestamp: i64,
    pub payload: LedgerCommandPayload,
}

impl LedgerCommand {
    pub fn new(payload: LedgerCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }

    /// Create a command with a fixed timestamp (replay, tests)
    pub fn at(timestamp: i64, payload: LedgerCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            payload,
        }
    }
}

/// Command payload variants (one per reducer action)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerCommandPayload {
    // ========== Ferias ==========
    CreateFeria {
        feria: FeriaCreate,
    },
    UpdateFeria {
        feria_id: i64,
        changes: FeriaUpdate,
    },
    DeleteFeria {
        feria_id: i64,
    },

    // ========== Citas ==========
    AddCita {
        cita: CitaCreate,
    },
    RemoveCita {
        cita_id: i64,
    },

    // ========== Voluntarios ==========
    AddVoluntario {
        voluntario: VoluntarioCreate,
    },
    RemoveVoluntario {
        voluntario_id: i64,
    },

    // ========== Demo ==========
    /// Drop every collection and reseed it from the bundled fixtures
    ResetDemo {},
}

impl LedgerCommandPayload {
    /// Short action name for logs
    pub fn action_name(&self) -> &'static str {
        match self {
            Self::CreateFeria { .. } => "CREATE_FERIA",
            Self::UpdateFeria { .. } => "UPDATE_FERIA",
            Self::DeleteFeria { .. } => "DELETE_FERIA",
            Self::AddCita { .. } => "ADD_CITA",
            Self::RemoveCita { .. } => "REMOVE_CITA",
            Self::AddVoluntario { .. } => "ADD_VOLUNTARIO",
            Self::RemoveVoluntario { .. } => "REMOVE_VOLUNTARIO",
            Self::ResetDemo {} => "RESET_DEMO",
        }
    }
}
