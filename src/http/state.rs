//! Application state for the HTTP server.

use crate::services::ProductionService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scheduling service backing every endpoint.
    pub service: ProductionService,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(service: ProductionService) -> Self {
        Self { service }
    }
}
