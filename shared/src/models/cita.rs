//! Cita Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Estado de toda cita registrada (no existe cancelación distinta del borrado)
pub const ESTADO_CONFIRMADA: &str = "confirmada";

/// Appointment entity (Cita: un cupo reservado en una feria)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cita {
    pub id: i64,
    /// Referenced fair; not enforced, may dangle after a fair is deleted
    pub id_feria: i64,
    pub nombre_dueno: String,
    pub telefono: String,
    pub nombre_mascota: String,
    pub especie: String,
    pub peso: String,
    pub edad: String,
    pub fecha_registro: String,
    pub estado: String,
}

/// Create cita payload (booking form)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CitaCreate {
    pub id_feria: i64,
    #[validate(length(min = 1, max = 120))]
    pub nombre_dueno: String,
    #[validate(length(min = 1, max = 30))]
    pub telefono: String,
    #[validate(length(min = 1, max = 80))]
    pub nombre_mascota: String,
    #[validate(length(min = 1))]
    pub especie: String,
    #[validate(length(min = 1))]
    pub peso: String,
    #[validate(length(min = 1))]
    pub edad: String,
}
