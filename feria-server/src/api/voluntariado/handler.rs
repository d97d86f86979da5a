//! Volunteer Handlers

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::run_command;
use crate::core::ServerState;
use shared::error::{AppError, AppResult};
use shared::ledger::LedgerCommandPayload;
use shared::models::{Voluntario, VoluntarioCreate};

/// POST /api/voluntariado - volunteer sign-up
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<VoluntarioCreate>,
) -> AppResult<Json<Voluntario>> {
    payload.validate()?;

    let response = run_command(
        &state,
        LedgerCommandPayload::AddVoluntario {
            voluntario: payload,
        },
    )?;

    response
        .entity_id
        .and_then(|id| state.ledger.get_voluntario(id))
        .map(Json)
        .ok_or_else(|| AppError::internal("Sign-up was accepted but the volunteer is missing"))
}
