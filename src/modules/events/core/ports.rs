use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::{Event, EventCandidate};
use crate::modules::events::core::pagination::{EventPage, PageRequest};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered event collection. Implementations keep insertion order and
/// guarantee that names are unique.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, candidate: EventCandidate) -> Result<Event, EventError>;
    async fn delete(&self, name: &str) -> Result<Event, EventError>;
    async fn list(&self, request: PageRequest) -> Result<EventPage, EventError>;
}
