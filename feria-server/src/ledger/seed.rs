//! Bundled demo data the collections are seeded from

use super::state::LedgerState;

const FERIAS_JSON: &str = include_str!("../../data/ferias.json");
const CITAS_JSON: &str = include_str!("../../data/citas.json");
const VOLUNTARIOS_JSON: &str = include_str!("../../data/voluntarios.json");

/// Parse the bundled fixtures
pub fn fixtures() -> Result<LedgerState, serde_json::Error> {
    Ok(LedgerState {
        ferias: serde_json::from_str(FERIAS_JSON)?,
        citas: serde_json::from_str(CITAS_JSON)?,
        voluntarios: serde_json::from_str(VOLUNTARIOS_JSON)?,
    })
}
