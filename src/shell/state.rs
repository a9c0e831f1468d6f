use crate::modules::events::core::ports::EventStore;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore + Send + Sync>,
    pub default_page_size: NonZeroUsize,
}

impl AppState {
    pub fn new(events: Arc<dyn EventStore + Send + Sync>, default_page_size: NonZeroUsize) -> Self {
        Self {
            events,
            default_page_size,
        }
    }
}
