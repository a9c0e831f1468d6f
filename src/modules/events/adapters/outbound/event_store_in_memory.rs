// In memory implementation of the EventStore port.
//
// Purpose
// - Hold the process-wide event collection for the lifetime of the server.
//
// Responsibilities
// - Keep events in insertion order.
// - Run validation and mutation under one write guard so concurrent
//   creates and deletes cannot interleave.

use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::{Event, EventCandidate};
use crate::modules::events::core::pagination::{EventPage, PageRequest};
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::modules::events::use_cases::create_event::decide::decide_create;
use crate::modules::events::use_cases::delete_event::decide::decide_delete;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, candidate: EventCandidate) -> Result<Event, EventError> {
        self.ensure_online()?;

        let mut events = self.events.write().await;
        let event = decide_create(&events, candidate)?;
        events.push(event.clone());
        tracing::debug!(name = %event.name, total = events.len(), "event created");
        Ok(event)
    }

    async fn delete(&self, name: &str) -> Result<Event, EventError> {
        self.ensure_online()?;

        let mut events = self.events.write().await;
        let position = decide_delete(&events, name)?;
        let removed = events.remove(position);
        tracing::debug!(name = %removed.name, total = events.len(), "event deleted");
        Ok(removed)
    }

    async fn list(&self, request: PageRequest) -> Result<EventPage, EventError> {
        self.ensure_online()?;

        let events = self.events.read().await;
        let window = request.window(events.len());
        Ok(EventPage {
            items: events[window].to_vec(),
            total: events.len(),
        })
    }
}
