// In memory implementation of the EventStore port.
//
// Purpose
// - Stand in for the events database in development and tests.
//
// Responsibilities
// - Keep the slot collection behind a lock so each operation completes before the next
//   mutation starts.
// - Simulate an unavailable backend when toggled offline.

use crate::modules::events::core::event::{EventPatch, NewEvent};
use crate::modules::events::core::responses::{
    DeletedEventEnvelope, EventEnvelope, EventLookup, EventsCount, EventsListing, Mutation,
    SlotsListing,
};
use crate::modules::events::core::slots::EventSlots;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use tokio::sync::RwLock;

pub struct InMemoryEventStore {
    inner: RwLock<EventSlots>,
    is_offline: bool,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    /// A store holding the two seed fixtures.
    pub fn new() -> Self {
        Self::with_slots(EventSlots::seeded())
    }

    pub fn empty() -> Self {
        Self::with_slots(EventSlots::new())
    }

    fn with_slots(slots: EventSlots) -> Self {
        Self {
            inner: RwLock::new(slots),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

fn listing(slots: &EventSlots) -> EventsListing {
    EventsListing {
        events: slots.events(),
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn add_event(
        &self,
        event: NewEvent,
        return_all: bool,
    ) -> Result<Mutation<EventEnvelope>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let event = guard.add(event);
        tracing::debug!(id = event.id, sort_date = %event.sort_date, "event added");
        if return_all {
            return Ok(Mutation::Listing(listing(&guard)));
        }
        Ok(Mutation::Record(EventEnvelope { event }))
    }

    async fn get_events(&self) -> Result<EventsListing, EventStoreError> {
        self.ensure_online()?;
        Ok(listing(&*self.inner.read().await))
    }

    async fn get_event_slots(&self) -> Result<SlotsListing, EventStoreError> {
        self.ensure_online()?;
        Ok(SlotsListing {
            events: self.inner.read().await.slots(),
        })
    }

    async fn get_event_by_id(&self, id: &str) -> Result<EventLookup, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(EventLookup {
            event: guard.find(id).cloned(),
        })
    }

    async fn get_events_by_title(&self, title: &str) -> Result<EventsListing, EventStoreError> {
        self.ensure_online()?;
        Ok(EventsListing {
            events: self.inner.read().await.find_by_title(title),
        })
    }

    async fn update_event(
        &self,
        id: &str,
        patch: EventPatch,
        return_all: bool,
    ) -> Result<Mutation<EventEnvelope>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let Some(event) = guard.update(id, patch) else {
            tracing::debug!(id, "update of unknown event");
            return Err(EventStoreError::NotFound { id: id.to_string() });
        };
        tracing::debug!(id = event.id, "event updated");
        if return_all {
            return Ok(Mutation::Listing(listing(&guard)));
        }
        Ok(Mutation::Record(EventEnvelope { event }))
    }

    async fn delete_event(
        &self,
        id: &str,
        return_all: bool,
    ) -> Result<Mutation<DeletedEventEnvelope>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let Some(deleted_event) = guard.delete(id) else {
            tracing::debug!(id, "delete of unknown event");
            return Err(EventStoreError::NotFound { id: id.to_string() });
        };
        tracing::debug!(id = deleted_event.id, "event tombstoned");
        if return_all {
            return Ok(Mutation::Listing(listing(&guard)));
        }
        Ok(Mutation::Record(DeletedEventEnvelope { deleted_event }))
    }

    async fn get_events_count(
        &self,
        include_tombstones: bool,
    ) -> Result<EventsCount, EventStoreError> {
        self.ensure_online()?;
        Ok(EventsCount {
            count: self.inner.read().await.count(include_tombstones),
        })
    }

    async fn delete_last_entry(&self) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        if let Some(id) = self.inner.write().await.delete_last_entry() {
            tracing::debug!(id, "last slot removed");
        }
        Ok(())
    }
}
