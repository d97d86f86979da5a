//! Search filters shared by the public list and the dashboard
//!
//! Text terms match case-insensitively as substrings; phone numbers match
//! as plain substrings. Empty parameters match everything.

use serde::Deserialize;
use shared::models::{Cita, Feria, Voluntario};

/// `?q=&fecha=&min_cupos=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeriaQuery {
    pub q: Option<String>,
    /// Exact `YYYY-MM-DD`
    pub fecha: Option<String>,
    /// Kept as text so an empty box means "no filter"
    pub min_cupos: Option<String>,
}

impl FeriaQuery {
    pub fn matches(&self, feria: &Feria) -> bool {
        let term = lowered(&self.q);
        let text = feria.titulo.to_lowercase().contains(&term)
            || feria.ubicacion.to_lowercase().contains(&term);
        let fecha = non_empty(&self.fecha).is_none_or(|f| feria.fecha == f);
        // A non-numeric minimum matches nothing
        let cupos = non_empty(&self.min_cupos).is_none_or(|min| {
            min.trim()
                .parse::<i32>()
                .is_ok_and(|min| feria.cupos_disponibles >= min)
        });
        text && fecha && cupos
    }
}

/// `?q=` over mascota, dueño and teléfono
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitaQuery {
    pub q: Option<String>,
}

impl CitaQuery {
    pub fn matches(&self, cita: &Cita) -> bool {
        let term = lowered(&self.q);
        cita.nombre_mascota.to_lowercase().contains(&term)
            || cita.nombre_dueno.to_lowercase().contains(&term)
            || cita.telefono.contains(&term)
    }
}

/// `?q=&area=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoluntarioQuery {
    pub q: Option<String>,
    /// Exact `area_interes`
    pub area: Option<String>,
}

impl VoluntarioQuery {
    pub fn matches(&self, voluntario: &Voluntario) -> bool {
        let term = lowered(&self.q);
        let text = voluntario.nombre.to_lowercase().contains(&term)
            || voluntario.email.to_lowercase().contains(&term)
            || voluntario.telefono.contains(&term);
        let area = non_empty(&self.area).is_none_or(|a| voluntario.area_interes == a);
        text && area
    }
}

fn lowered(term: &Option<String>) -> String {
    term.as_deref().unwrap_or_default().to_lowercase()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
