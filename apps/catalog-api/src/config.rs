//! Configuration for Catalog API

use core_config::{app_info, env_parse, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use domain_catalog::EmptyResultPolicy;
use std::time::Duration;

pub use core_config::Environment;

pub const EMPTY_RESULT_POLICY_VAR: &str = "CATALOG_EMPTY_RESULT_POLICY";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "CATALOG_SHUTDOWN_TIMEOUT_SECS";

/// Catalog behaviour knobs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// How list queries answer an empty page (`permissive` | `strict`)
    pub empty_result_policy: EmptyResultPolicy,
    /// Upper bound for shutdown cleanup
    pub shutdown_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            empty_result_policy: EmptyResultPolicy::default(),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let empty_result_policy = env_parse(EMPTY_RESULT_POLICY_VAR, defaults.empty_result_policy)?;
        let shutdown_secs = env_parse(SHUTDOWN_TIMEOUT_VAR, defaults.shutdown_timeout.as_secs())?;

        Ok(Self {
            empty_result_policy,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }
}
