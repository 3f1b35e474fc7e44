//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::LocationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Location service for all reads.
    pub location_service: Arc<LocationService>,
}

impl AppState {
    /// Wraps a service into shared state.
    #[must_use]
    pub fn new(location_service: LocationService) -> Self {
        Self {
            location_service: Arc::new(location_service),
        }
    }
}
