//! Application state for the web layer.

use std::sync::Arc;

use crate::analyze::AnalyzerConfig;
use crate::store::ItineraryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Persistent itinerary store
    pub store: Arc<ItineraryStore>,

    /// Connection analyzer configuration
    pub config: Arc<AnalyzerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ItineraryStore, config: AnalyzerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
