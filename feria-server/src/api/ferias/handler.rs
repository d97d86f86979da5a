//! Fair API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::filters::FeriaQuery;
use crate::core::ServerState;
use shared::error::{AppError, AppResult};
use shared::models::{Feria, FeriaDetail};

/// GET /api/ferias - list fairs
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FeriaQuery>,
) -> AppResult<Json<Vec<Feria>>> {
    let ferias = state
        .ledger
        .list_ferias()
        .into_iter()
        .filter(|f| query.matches(f))
        .collect();
    Ok(Json(ferias))
}

/// GET /api/ferias/{id} - fair detail
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FeriaDetail>> {
    let feria = state
        .ledger
        .get_feria(id)
        .ok_or_else(|| AppError::feria_not_found(id))?;
    Ok(Json(FeriaDetail::from(feria)))
}
