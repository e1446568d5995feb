//! HTTP handlers for the Catalog API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::CatalogResult;
use crate::models::{ProductCategory, ProductQuery, ProductView};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        count_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductView, ProductCategory, ProductQuery, ProductCount),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog query and management endpoints")
    )
)]
pub struct ApiDoc;

/// Number of products matching a filter
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCount {
    pub count: u64,
}

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/count", get(count_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List one page of products matching the optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products", body = Vec<ProductView>),
        (status = 400, description = "Malformed price or unknown category"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<Vec<ProductView>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Count products matching the optional filters
#[utoipa::path(
    get,
    path = "/count",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Number of matching products", body = ProductCount),
        (status = 400, description = "Malformed price or unknown category"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<ProductCount>> {
    let count = service.count_products(query).await?;
    Ok(Json(ProductCount { count }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductView,
    responses(
        (status = 201, description = "Product created successfully", body = ProductView),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductView>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductView),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<ProductView>> {
    let product = service.get_product(Some(id)).await?;
    Ok(Json(product))
}

/// Update a product; the path ID takes precedence over any ID in the body
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductView,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductView),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(mut input): ValidatedJson<ProductView>,
) -> CatalogResult<Json<ProductView>> {
    input.id = Some(id);
    let product = service.update_product(input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<impl IntoResponse> {
    service.delete_product(Some(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
