//! HTTP middleware module.
//!
//! CORS is configured by [`crate::server::create_router`]; this module holds
//! the response-hardening middleware it installs.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::security_headers;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod security;

pub use security::security_headers;
