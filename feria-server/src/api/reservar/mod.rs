//! Booking API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/reservar | GET | Fairs the booking form offers |
//! | /api/reservar | POST | Book one seat, returns the ticket |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::Ticket;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reservar", get(handler::bookable).post(handler::book))
}
