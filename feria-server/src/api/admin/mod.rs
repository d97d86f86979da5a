//! Admin dashboard API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/admin/resumen | GET | Collection counts |
//! | /api/admin/ferias | GET | Fairs filtered by `q`, `fecha`, `min_cupos` |
//! | /api/admin/ferias | POST | Create a fair |
//! | /api/admin/ferias/{id} | PUT | Edit a fair (capacity reconciled) |
//! | /api/admin/ferias/{id} | DELETE | Delete a fair, its citas stay |
//! | /api/admin/citas | GET | Citas filtered by `q` |
//! | /api/admin/citas/{id} | DELETE | Delete a cita, frees its seat |
//! | /api/admin/voluntarios | GET | Volunteers filtered by `q`, `area` |
//! | /api/admin/voluntarios/{id} | DELETE | Delete a volunteer |
//! | /api/admin/export/{coleccion} | GET | CSV download |
//! | /api/admin/reset | POST | Restore the demo data |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/resumen", get(handler::resumen))
        .route(
            "/ferias",
            get(handler::list_ferias).post(handler::create_feria),
        )
        .route(
            "/ferias/{id}",
            put(handler::update_feria).delete(handler::delete_feria),
        )
        .route("/citas", get(handler::list_citas))
        .route("/citas/{id}", delete(handler::delete_cita))
        .route("/voluntarios", get(handler::list_voluntarios))
        .route("/voluntarios/{id}", delete(handler::delete_voluntario))
        .route("/export/{coleccion}", get(handler::export))
        .route("/reset", post(handler::reset))
}
