//! Application state management

use domain_catalog::InMemoryProductRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            repository: InMemoryProductRepository::new(),
        }
    }
}
