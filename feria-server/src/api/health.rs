//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness plus ledger counters |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    /// Changes on every process start
    epoch: String,
    /// Last journal sequence (None when the store could not be read)
    sequence: Option<u64>,
    /// Fairs whose availability disagrees with their citas
    capacity_drift: usize,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let sequence = match state.ledger.current_sequence() {
        Ok(seq) => Some(seq),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not read the journal");
            None
        }
    };

    Json(HealthResponse {
        status: if sequence.is_some() { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        epoch: state.ledger.epoch().to_string(),
        sequence,
        capacity_drift: state.ledger.verify_capacity().len(),
    })
}
