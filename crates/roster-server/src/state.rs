use std::sync::Arc;

use roster_core::RosterSource;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RosterSource>,
}
