//! Admin Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use http::header;
use serde::Serialize;
use validator::Validate;

use crate::api::filters::{CitaQuery, FeriaQuery, VoluntarioQuery};
use crate::api::run_command;
use crate::core::ServerState;
use crate::export::{ExportError, export_filename, to_csv};
use crate::ledger::Collection;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::ledger::LedgerCommandPayload;
use shared::models::{Cita, Feria, FeriaCreate, FeriaUpdate, Voluntario};

const ELIMINADO: &str = "Elemento eliminado correctamente.";

/// Dashboard counters
#[derive(Debug, Serialize)]
pub struct Resumen {
    pub ferias: usize,
    pub citas: usize,
    pub voluntarios: usize,
    /// Seats taken across all fairs
    pub cupos_reservados: i64,
}

/// Result of an admin deletion (`removed` is false when the id was unknown)
#[derive(Debug, Serialize)]
pub struct Eliminado {
    pub id: i64,
    pub removed: bool,
}

fn resumen_of(state: &ServerState) -> Resumen {
    let snapshot = state.ledger.snapshot();
    Resumen {
        ferias: snapshot.ferias.len(),
        citas: snapshot.citas.len(),
        voluntarios: snapshot.voluntarios.len(),
        cupos_reservados: snapshot
            .ferias
            .iter()
            .map(|f| i64::from(f.reservados()))
            .sum(),
    }
}

/// GET /api/admin/resumen
pub async fn resumen(State(state): State<ServerState>) -> AppResult<Json<Resumen>> {
    Ok(Json(resumen_of(&state)))
}

// ========== Ferias ==========

/// GET /api/admin/ferias
pub async fn list_ferias(
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

/// POST /api/admin/ferias
pub async fn create_feria(
    State(state): State<ServerState>,
    Json(payload): Json<FeriaCreate>,
) -> AppResult<Json<Feria>> {
    payload.validate()?;

    let response = run_command(&state, LedgerCommandPayload::CreateFeria { feria: payload })?;
    let feria = response
        .entity_id
        .and_then(|id| state.ledger.get_feria(id))
        .ok_or_else(|| AppError::internal("Fair was created but is missing"))?;

    crate::audit_log!("feria.create", "feria", format!("id={} titulo={}", feria.id, feria.titulo));
    Ok(Json(feria))
}

/// PUT /api/admin/ferias/{id}
pub async fn update_feria(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(changes): Json<FeriaUpdate>,
) -> AppResult<Json<Feria>> {
    run_command(
        &state,
        LedgerCommandPayload::UpdateFeria {
            feria_id: id,
            changes,
        },
    )?;
    let feria = state
        .ledger
        .get_feria(id)
        .ok_or_else(|| AppError::feria_not_found(id))?;

    crate::audit_log!(
        "feria.update",
        "feria",
        format!(
            "id={} cupos_totales={} cupos_disponibles={}",
            feria.id, feria.cupos_totales, feria.cupos_disponibles
        )
    );
    Ok(Json(feria))
}

/// DELETE /api/admin/ferias/{id}
pub async fn delete_feria(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Eliminado>> {
    let response = run_command(&state, LedgerCommandPayload::DeleteFeria { feria_id: id })?;
    let removed = response.entity_id.is_some();
    if removed {
        crate::audit_log!("feria.delete", "feria", format!("id={id}"));
    }
    Ok(ApiResponse::success_with_message(
        ELIMINADO,
        Eliminado { id, removed },
    ))
}

// ========== Citas ==========

/// GET /api/admin/citas
pub async fn list_citas(
    State(state): State<ServerState>,
    Query(query): Query<CitaQuery>,
) -> AppResult<Json<Vec<Cita>>> {
    let citas = state
        .ledger
        .list_citas()
        .into_iter()
        .filter(|c| query.matches(c))
        .collect();
    Ok(Json(citas))
}

/// DELETE /api/admin/citas/{id}
pub async fn delete_cita(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Eliminado>> {
    let response = run_command(&state, LedgerCommandPayload::RemoveCita { cita_id: id })?;
    let removed = response.entity_id.is_some();
    if removed {
        crate::audit_log!("cita.delete", "cita", format!("id={id}"));
    }
    Ok(ApiResponse::success_with_message(
        ELIMINADO,
        Eliminado { id, removed },
    ))
}

// ========== Voluntarios ==========

/// GET /api/admin/voluntarios
pub async fn list_voluntarios(
    State(state): State<ServerState>,
    Query(query): Query<VoluntarioQuery>,
) -> AppResult<Json<Vec<Voluntario>>> {
    let voluntarios = state
        .ledger
        .list_voluntarios()
        .into_iter()
        .filter(|v| query.matches(v))
        .collect();
    Ok(Json(voluntarios))
}

/// DELETE /api/admin/voluntarios/{id}
pub async fn delete_voluntario(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Eliminado>> {
    let response = run_command(
        &state,
        LedgerCommandPayload::RemoveVoluntario { voluntario_id: id },
    )?;
    let removed = response.entity_id.is_some();
    if removed {
        crate::audit_log!("voluntario.delete", "voluntario", format!("id={id}"));
    }
    Ok(ApiResponse::success_with_message(
        ELIMINADO,
        Eliminado { id, removed },
    ))
}

// ========== Export / reset ==========

/// GET /api/admin/export/{coleccion} - CSV download
pub async fn export(
    State(state): State<ServerState>,
    Path(coleccion): Path<String>,
) -> AppResult<Response> {
    let collection = Collection::from_name(&coleccion).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::UnknownCollection,
            format!("Colección desconocida: {coleccion}"),
        )
    })?;

    let body = match collection {
        Collection::Ferias => to_csv(&state.ledger.list_ferias()),
        Collection::Citas => to_csv(&state.ledger.list_citas()),
        Collection::Voluntarios => to_csv(&state.ledger.list_voluntarios()),
    }
    .map_err(|e| match e {
        ExportError::Empty => AppError::with_message(ErrorCode::NoDataToExport, e.to_string()),
        other => AppError::internal(other.to_string()),
    })?;

    let filename = export_filename(collection.name(), chrono::Local::now().naive_local());
    crate::audit_log!("export", collection.name(), filename.clone());

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, body).into_response())
}

/// POST /api/admin/reset - restore the demo data
pub async fn reset(State(state): State<ServerState>) -> AppResult<ApiResponse<Resumen>> {
    run_command(&state, LedgerCommandPayload::ResetDemo {})?;
    crate::audit_log!("demo.reset", "ledger");
    Ok(ApiResponse::success_with_message(
        "Datos de demostración restaurados.",
        resumen_of(&state),
    ))
}
