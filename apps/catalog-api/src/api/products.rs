//! Catalog API routes

use axum::Router;
use domain_catalog::{handlers, CatalogService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = CatalogService::new(state.repository.clone())
        .with_empty_result_policy(state.config.catalog.empty_result_policy);
    handlers::router(service)
}
