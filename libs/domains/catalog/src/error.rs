use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Required argument missing: {0}")]
    MissingArgument(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("No products found")]
    NoResults,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses.
///
/// Storage and internal failures are logged here and reported with a generic
/// message, so collaborator details never reach the client.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingArgument(msg) => {
                AppError::BadRequest(format!("Required argument missing: {}", msg))
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            CatalogError::NoResults => AppError::NotFound("No products found".to_string()),
            CatalogError::Storage(msg) => {
                tracing::error!(error = %msg, "Catalog storage failure");
                AppError::InternalServerError("An unexpected error occurred".to_string())
            }
            CatalogError::Internal(msg) => {
                tracing::error!(error = %msg, "Catalog internal failure");
                AppError::InternalServerError("An unexpected error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::Validation(err.to_string())
    }
}
