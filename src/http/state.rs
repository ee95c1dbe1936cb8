use crate::service::MeetingService;
use crate::store::{MeetingStore, MemoryStore};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Meeting use cases (wraps the shared store handle)
    pub meetings: MeetingService,
}

impl AppState {
    pub fn new(store: Arc<dyn MeetingStore>) -> Self {
        Self {
            meetings: MeetingService::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
