//! Catalog Domain
//!
//! Product catalog with filtered, paginated queries and basic product
//! lifecycle operations. Storage is reached through the
//! [`ProductRepository`] trait; an in-memory implementation ships with the
//! crate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Orchestration, empty-result policy
//! └──────┬──────┘
//!        │  FilterSpec → Predicate + PageWindow
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, projection, raw query
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, EmptyResultPolicy, InMemoryProductRepository};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = CatalogService::new(repository)
//!     .with_empty_result_policy(EmptyResultPolicy::Strict);
//!
//! let router = handlers::router(service);
//! # let _ = router;
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod predicate;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use filter::{FilterSpec, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use handlers::{ApiDoc, ProductCount};
pub use models::{NewProduct, Product, ProductCategory, ProductQuery, ProductView};
pub use pagination::{PageWindow, Paginator};
pub use predicate::{Condition, Predicate, PredicateBuilder};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{CatalogService, EmptyResultPolicy};
