//! Booking Handlers
//!
//! The seat check happens here, before the command is issued. The ledger
//! itself accepts any booking and floors availability at zero.

use axum::{Json, extract::State};
use serde::Serialize;
use validator::Validate;

use crate::api::run_command;
use crate::core::ServerState;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::ledger::LedgerCommandPayload;
use shared::models::{Cita, CitaCreate, Feria};

const SIN_CUPOS: &str = "La feria seleccionada ya no tiene cupos disponibles.";

/// Confirmation shown after a successful booking
#[derive(Debug, Serialize)]
pub struct Ticket {
    pub cita: Cita,
    pub feria_titulo: String,
    pub feria_fecha: String,
}

/// GET /api/reservar - fairs open for booking
pub async fn bookable(State(state): State<ServerState>) -> AppResult<Json<Vec<Feria>>> {
    let ferias = state
        .ledger
        .list_ferias()
        .into_iter()
        .filter(Feria::is_bookable)
        .collect();
    Ok(Json(ferias))
}

/// POST /api/reservar - book a seat
pub async fn book(
    State(state): State<ServerState>,
    Json(payload): Json<CitaCreate>,
) -> AppResult<Json<Ticket>> {
    payload.validate()?;

    let feria = state
        .ledger
        .get_feria(payload.id_feria)
        .filter(Feria::is_bookable)
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::FeriaAgotada, SIN_CUPOS)
                .with_detail("feria_id", payload.id_feria)
        })?;

    let response = run_command(&state, LedgerCommandPayload::AddCita { cita: payload })?;
    let cita = response
        .entity_id
        .and_then(|id| state.ledger.get_cita(id))
        .ok_or_else(|| AppError::internal("Booking was accepted but the cita is missing"))?;

    tracing::info!(
        cita_id = cita.id,
        feria_id = feria.id,
        "Cita registrada"
    );

    Ok(Json(Ticket {
        cita,
        feria_titulo: feria.titulo,
        feria_fecha: feria.fecha,
    }))
}
