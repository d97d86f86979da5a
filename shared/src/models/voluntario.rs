//! Voluntario Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Volunteer entity (Voluntario)
///
/// Independent of capacity accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voluntario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub area_interes: String,
    pub disponibilidad: String,
    #[serde(default)]
    pub experiencia_previa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<String>,
}

/// Create voluntario payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VoluntarioCreate {
    #[validate(length(min = 1, max = 120))]
    pub nombre: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 30))]
    pub telefono: String,
    #[validate(length(min = 1))]
    pub area_interes: String,
    #[validate(length(min = 1))]
    pub disponibilidad: String,
    #[serde(default)]
    pub experiencia_previa: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_validated() {
        let mut payload = VoluntarioCreate {
            nombre: "Ana Guevara".to_string(),
            email: "ana@example.com".to_string(),
            telefono: "8888-8888".to_string(),
            area_interes: "Logística".to_string(),
            disponibilidad: "Fines de semana".to_string(),
            experiencia_previa: String::new(),
        };
        assert!(payload.validate().is_ok());

        payload.email = "no-es-un-correo".to_string();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
