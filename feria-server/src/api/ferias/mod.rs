//! Public fair API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/ferias | GET | Fairs filtered by `q`, `fecha`, `min_cupos` |
//! | /api/ferias/{id} | GET | One fair with its derived seat state |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/ferias", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
