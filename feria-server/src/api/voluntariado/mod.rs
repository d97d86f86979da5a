//! Volunteer sign-up API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/voluntariado | POST | Register a volunteer |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/voluntariado", post(handler::register))
}
