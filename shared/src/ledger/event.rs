//! Ledger events - immutable facts recorded after command processing

use crate::models::{Cita, Feria, Voluntario};
use serde::{Deserialize, Serialize};

/// Ledger event - journal record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Event unique ID
    pub event_id: String,
    /// Journal sequence number (ordering and replay)
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command that triggered this event
    pub command_id: String,
    pub event_type: LedgerEventType,
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEventType {
    FeriaCreated,
    FeriaUpdated,
    FeriaDeleted,
    CitaAdded,
    CitaRemoved,
    VoluntarioAdded,
    VoluntarioRemoved,
    DemoReset,
}

impl std::fmt::Display for LedgerEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEventType::FeriaCreated => write!(f, "FERIA_CREATED"),
            LedgerEventType::FeriaUpdated => write!(f, "FERIA_UPDATED"),
            LedgerEventType::FeriaDeleted => write!(f, "FERIA_DELETED"),
            LedgerEventType::CitaAdded => write!(f, "CITA_ADDED"),
            LedgerEventType::CitaRemoved => write!(f, "CITA_REMOVED"),
            LedgerEventType::VoluntarioAdded => write!(f, "VOLUNTARIO_ADDED"),
            LedgerEventType::VoluntarioRemoved => write!(f, "VOLUNTARIO_REMOVED"),
            LedgerEventType::DemoReset => write!(f, "DEMO_RESET"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Ferias ==========
    FeriaCreated {
        feria: Feria,
    },

    /// Full fair after the update (capacity already reconciled)
    FeriaUpdated {
        feria: Feria,
        previous_totales: i32,
        reservados: i32,
    },

    FeriaDeleted {
        feria_id: i64,
        titulo: String,
        /// Appointments left pointing at the deleted fair
        orphaned_citas: usize,
    },

    // ========== Citas ==========
    /// Applying it consumes one seat of `cita.id_feria` (floored at 0)
    CitaAdded {
        cita: Cita,
    },

    /// Applying it returns one seat to `id_feria` (not capped)
    CitaRemoved {
        cita_id: i64,
        id_feria: i64,
    },

    // ========== Voluntarios ==========
    VoluntarioAdded {
        voluntario: Voluntario,
    },

    VoluntarioRemoved {
        voluntario_id: i64,
    },

    // ========== Demo ==========
    DemoReset {
        ferias: Vec<Feria>,
        citas: Vec<Cita>,
        voluntarios: Vec<Voluntario>,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> LedgerEventType {
        match self {
            Self::FeriaCreated { .. } => LedgerEventType::FeriaCreated,
            Self::FeriaUpdated { .. } => LedgerEventType::FeriaUpdated,
            Self::FeriaDeleted { .. } => LedgerEventType::FeriaDeleted,
            Self::CitaAdded { .. } => LedgerEventType::CitaAdded,
            Self::CitaRemoved { .. } => LedgerEventType::CitaRemoved,
            Self::VoluntarioAdded { .. } => LedgerEventType::VoluntarioAdded,
            Self::VoluntarioRemoved { .. } => LedgerEventType::VoluntarioRemoved,
            Self::DemoReset { .. } => LedgerEventType::DemoReset,
        }
    }
}

impl LedgerEvent {
    /// Create a new event; the type is derived from the payload
    pub fn new(sequence: u64, command_id: String, payload: EventPayload) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_matches_payload() {
        let event = LedgerEvent::new(
            3,
            "cmd-1".to_string(),
            EventPayload::CitaRemoved {
                cita_id: 10,
                id_feria: 20,
            },
        );
        assert_eq!(event.event_type, LedgerEventType::CitaRemoved);
        assert_eq!(event.event_type.to_string(), "CITA_REMOVED");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "CITA_REMOVED");
        assert_eq!(json["payload"]["type"], "CITA_REMOVED");
    }
}
