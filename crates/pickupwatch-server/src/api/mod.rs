//! HTTP surface: the cron trigger and a liveness probe.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use pickupwatch_core::catalog::{CANDIDATE_LOCATIONS, WATCHED_PARTS};
use pickupwatch_fulfillment::FulfillmentClient;
use pickupwatch_notify::Notifier;
use pickupwatch_sweep::run_sweep;

#[derive(Clone)]
pub struct AppState {
    pub resolver: FulfillmentClient,
    pub notifier: Notifier,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cron", get(run_cron))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

/// The external scheduler's entry point: one full sweep per GET.
///
/// 200 with `{city, stores}` or `{message}` on a completed sweep; a vendor,
/// credential, or transport failure terminates the run and maps to a 500 —
/// the scheduler's next tick is the only retry.
async fn run_cron(State(state): State<AppState>) -> Response {
    let result = run_sweep(
        &state.resolver,
        &state.notifier,
        &CANDIDATE_LOCATIONS,
        &WATCHED_PARTS,
        |key| std::env::var(key),
    )
    .await;

    match result {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "sweep failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
