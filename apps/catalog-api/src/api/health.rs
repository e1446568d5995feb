//! Readiness endpoint

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use domain_catalog::{Predicate, ProductRepository};

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let storage = state.repository.clone();
    let storage_check: HealthCheckFuture = Box::pin(async move {
        storage
            .count_matching(&Predicate::match_all())
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    });

    let checks = vec![("storage", storage_check)];

    match run_health_checks(checks).await {
        Ok(ok) => ok,
        Err(unavailable) => unavailable,
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
