use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::Repositories;

/// Application state shared across all handlers and services
#[derive(Clone)]
pub struct AppState {
    /// Persistence ports the services are built from
    pub repos: Repositories,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new AppState
    pub fn new(repos: Repositories, config: AppConfig) -> Self {
        Self {
            repos,
            config: Arc::new(config),
        }
    }
}
