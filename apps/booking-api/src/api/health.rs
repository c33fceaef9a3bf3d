//! Readiness endpoint: verifies MongoDB and NATS connectivity.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check. Reports each dependency separately and returns 503 when
/// any of them is unreachable.
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "mongodb",
            Box::pin(async {
                if database::mongodb::check_health(&state.mongo_client).await {
                    Ok(())
                } else {
                    Err("ping failed".to_string())
                }
            }),
        ),
        (
            "nats",
            Box::pin(async {
                match state.nats_client.connection_state() {
                    async_nats::connection::State::Connected => Ok(()),
                    other => Err(format!("connection state: {:?}", other)),
                }
            }),
        ),
    ];

    run_health_checks(checks).await
}
