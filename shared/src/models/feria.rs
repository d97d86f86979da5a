//! Feria Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Estado asignado a toda feria recién creada
pub const ESTADO_ABIERTA: &str = "abierta";

/// Availability at or below this many seats is shown as "few left"
pub const POCOS_CUPOS_UMBRAL: i32 = 10;

/// Fair entity (Feria: jornada de castración, vacunación o adopción)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feria {
    pub id: i64,
    pub titulo: String,
    pub fecha: String,
    pub hora: String,
    pub ubicacion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapa_url: Option<String>,
    pub tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub requisitos: Vec<String>,
    pub cupos_totales: i32,
    pub cupos_disponibles: i32,
    pub estado: String,
}

impl Feria {
    /// Seats already committed to appointments.
    ///
    /// Derived from the two stored counters, never stored itself. Negative
    /// when seats were returned past the total.
    pub fn reservados(&self) -> i32 {
        self.cupos_totales.saturating_sub(self.cupos_disponibles)
    }

    pub fn status(&self) -> FeriaStatus {
        if self.cupos_disponibles > 0 {
            FeriaStatus::Abierta
        } else {
            FeriaStatus::Agotada
        }
    }

    /// Traffic-light level shown next to the seat counter
    pub fn cupo_level(&self) -> CupoLevel {
        match self.cupos_disponibles {
            n if n <= 0 => CupoLevel::Agotado,
            n if n <= POCOS_CUPOS_UMBRAL => CupoLevel::Pocos,
            _ => CupoLevel::Disponible,
        }
    }

    /// Whether the booking form offers this fair
    pub fn is_bookable(&self) -> bool {
        self.estado == ESTADO_ABIERTA && self.cupos_disponibles > 0
    }
}

/// Drop blank lines from a requirements list (the form sends one per line)
pub fn clean_requisitos(requisitos: Vec<String>) -> Vec<String> {
    requisitos
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

/// Derived fair status (not stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeriaStatus {
    Abierta,
    Agotada,
}

/// Seat level for the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CupoLevel {
    Agotado,
    Pocos,
    Disponible,
}

/// Create feria payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeriaCreate {
    #[validate(length(min = 1, max = 200))]
    pub titulo: String,
    #[validate(length(min = 1))]
    pub fecha: String,
    #[validate(length(min = 1))]
    pub hora: String,
    #[validate(length(min = 1, max = 200))]
    pub ubicacion: String,
    pub mapa_url: Option<String>,
    #[validate(length(min = 1))]
    pub tipo: String,
    pub imagen: Option<String>,
    pub descripcion: Option<String>,
    #[serde(default)]
    pub requisitos: Vec<String>,
    pub cupos_totales: i32,
}

/// Update feria payload
///
/// `cupos_totales` is reconciled against the seats already reserved;
/// `cupos_disponibles` is never taken from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeriaUpdate {
    pub titulo: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub ubicacion: Option<String>,
    pub mapa_url: Option<String>,
    pub tipo: Option<String>,
    pub imagen: Option<String>,
    pub descripcion: Option<String>,
    pub requisitos: Option<Vec<String>>,
    pub cupos_totales: Option<i32>,
    pub estado: Option<String>,
}

/// Fair plus its derived view state (detail page)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeriaDetail {
    #[serde(flatten)]
    pub feria: Feria,
    pub reservados: i32,
    pub status: FeriaStatus,
    pub cupo_level: CupoLevel,
}

impl From<Feria> for FeriaDetail {
    fn from(feria: Feria) -> Self {
        Self {
            reservados: feria.reservados(),
            status: feria.status(),
            cupo_level: feria.cupo_level(),
            feria,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feria(totales: i32, disponibles: i32) -> Feria {
        Feria {
            id: 1,
            titulo: "Castración Cartago".to_string(),
            fecha: "2026-03-14".to_string(),
            hora: "08:00".to_string(),
            ubicacion: "Parque Central".to_string(),
            mapa_url: None,
            tipo: "Castración".to_string(),
            imagen: None,
            descripcion: None,
            requisitos: vec![],
            cupos_totales: totales,
            cupos_disponibles: disponibles,
            estado: ESTADO_ABIERTA.to_string(),
        }
    }

    #[test]
    fn test_reservados_is_derived() {
        assert_eq!(feria(50, 47).reservados(), 3);
        assert_eq!(feria(0, 0).reservados(), 0);
    }

    #[test]
    fn test_reservados_saturates() {
        assert_eq!(feria(0, 1).reservados(), -1);
        assert_eq!(feria(i32::MIN, 1).reservados(), i32::MIN);
    }

    #[test]
    fn test_status_and_level() {
        assert_eq!(feria(50, 0).status(), FeriaStatus::Agotada);
        assert_eq!(feria(50, 0).cupo_level(), CupoLevel::Agotado);
        assert_eq!(feria(50, 10).cupo_level(), CupoLevel::Pocos);
        assert_eq!(feria(50, 11).cupo_level(), CupoLevel::Disponible);
        assert_eq!(feria(50, 11).status(), FeriaStatus::Abierta);
    }

    #[test]
    fn test_bookable_requires_open_estado() {
        let mut f = feria(10, 5);
        assert!(f.is_bookable());
        f.estado = "cerrada".to_string();
        assert!(!f.is_bookable());
        assert!(!feria(10, 0).is_bookable());
    }

    #[test]
    fn test_clean_requisitos_drops_blank_lines() {
        let raw = vec![
            "Ayuno de 8 horas".to_string(),
            "   ".to_string(),
            " Traer cobija ".to_string(),
        ];
        assert_eq!(
            clean_requisitos(raw),
            vec!["Ayuno de 8 horas".to_string(), "Traer cobija".to_string()]
        );
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": 7, "titulo": "Vacunación", "fecha": "2026-04-01", "hora": "09:00",
            "ubicacion": "Salón comunal", "tipo": "Vacunación",
            "cupos_totales": 30, "cupos_disponibles": 30, "estado": "abierta"
        }"#;
        let f: Feria = serde_json::from_str(json).unwrap();
        assert!(f.requisitos.is_empty());
        assert!(f.mapa_url.is_none());
    }

    #[test]
    fn test_detail_flattens_feria() {
        let detail = FeriaDetail::from(feria(50, 47));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["titulo"], "Castración Cartago");
        assert_eq!(json["reservados"], 3);
        assert_eq!(json["status"], "abierta");
        assert_eq!(json["cupo_level"], "disponible");
    }
}
