//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`ferias`] - public fair list and detail
//! - [`reservar`] - booking form
//! - [`voluntariado`] - volunteer sign-up
//! - [`nosotros`] - organisation and contact info
//! - [`admin`] - dashboard: summary, filtered lists, deletes, export, fair editor
//!
//! No route requires authentication.

pub mod admin;
pub mod ferias;
pub mod filters;
pub mod health;
pub mod nosotros;
pub mod reservar;
pub mod voluntariado;

use axum::Router;
use axum::middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use shared::error::AppResult;
use shared::ledger::{CommandResponse, LedgerCommand, LedgerCommandPayload};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(ferias::router())
        .merge(reservar::router())
        .merge(voluntariado::router())
        .merge(nosotros::router())
        .merge(admin::router())
}

/// Build the application with state and middleware
///
/// Used by the HTTP server and by the integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// Run a ledger command; a rejected command becomes an `AppError`
pub(crate) fn run_command(
    state: &ServerState,
    payload: LedgerCommandPayload,
) -> AppResult<CommandResponse> {
    let mut response = state.ledger.execute_command(LedgerCommand::new(payload));
    match response.error.take() {
        Some(err) => Err(err.into()),
        None => Ok(response),
    }
}
