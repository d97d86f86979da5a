//! In-memory view of the three collections

use serde::{Deserialize, Serialize};
use shared::ledger::CapacityDrift;
use shared::models::{Cita, Feria, Voluntario};

/// All persisted collections, in stored order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub ferias: Vec<Feria>,
    pub citas: Vec<Cita>,
    pub voluntarios: Vec<Voluntario>,
}

impl LedgerState {
    pub fn feria(&self, id: i64) -> Option<&Feria> {
        self.ferias.iter().find(|f| f.id == id)
    }

    pub fn feria_mut(&mut self, id: i64) -> Option<&mut Feria> {
        self.ferias.iter_mut().find(|f| f.id == id)
    }

    pub fn cita(&self, id: i64) -> Option<&Cita> {
        self.citas.iter().find(|c| c.id == id)
    }

    pub fn voluntario(&self, id: i64) -> Option<&Voluntario> {
        self.voluntarios.iter().find(|v| v.id == id)
    }

    pub fn citas_for_feria(&self, feria_id: i64) -> impl Iterator<Item = &Cita> {
        self.citas.iter().filter(move |c| c.id_feria == feria_id)
    }

    /// Largest id across all collections (0 when empty)
    pub fn max_id(&self) -> i64 {
        let ferias = self.ferias.iter().map(|f| f.id);
        let citas = self.citas.iter().map(|c| c.id);
        let voluntarios = self.voluntarios.iter().map(|v| v.id);
        ferias.chain(citas).chain(voluntarios).max().unwrap_or(0)
    }

    /// Fairs whose stored availability disagrees with their citas
    ///
    /// Expected availability is `cupos_totales - citas`, floored at 0.
    pub fn verify_capacity(&self) -> Vec<CapacityDrift> {
        self.ferias
            .iter()
            .filter_map(|feria| {
                let citas = self.citas_for_feria(feria.id).count() as i32;
                let expected = (feria.cupos_totales - citas).max(0);
                (feria.cupos_disponibles != expected).then(|| CapacityDrift {
                    feria_id: feria.id,
                    cupos_totales: feria.cupos_totales,
                    cupos_disponibles: feria.cupos_disponibles,
                    citas,
                    expected_disponibles: expected,
                })
            })
            .collect()
    }
}
