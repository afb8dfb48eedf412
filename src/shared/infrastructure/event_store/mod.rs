// Port for the events persistence layer.
//
// Purpose
// - Describe what callers need from an event store without tying them to a backend.
//
// Boundaries
// - Ids are taken as raw text. Unparsable ids match nothing.
// - `return_all` selects between the full listing and the touched record.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::{EventPatch, NewEvent};
use crate::modules::events::core::responses::{
    DeletedEventEnvelope, EventEnvelope, EventLookup, EventsCount, EventsListing, Mutation,
    SlotsListing,
};

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event not found: {id}")]
    NotFound { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn add_event(
        &self,
        event: NewEvent,
        return_all: bool,
    ) -> Result<Mutation<EventEnvelope>, EventStoreError>;

    async fn get_events(&self) -> Result<EventsListing, EventStoreError>;

    async fn get_event_slots(&self) -> Result<SlotsListing, EventStoreError>;

    async fn get_event_by_id(&self, id: &str) -> Result<EventLookup, EventStoreError>;

    async fn get_events_by_title(&self, title: &str) -> Result<EventsListing, EventStoreError>;

    async fn update_event(
        &self,
        id: &str,
        patch: EventPatch,
        return_all: bool,
    ) -> Result<Mutation<EventEnvelope>, EventStoreError>;

    async fn delete_event(
        &self,
        id: &str,
        return_all: bool,
    ) -> Result<Mutation<DeletedEventEnvelope>, EventStoreError>;

    async fn get_events_count(
        &self,
        include_tombstones: bool,
    ) -> Result<EventsCount, EventStoreError>;

    /// Fixture cleanup: removes the last slot outright.
    async fn delete_last_entry(&self) -> Result<(), EventStoreError>;
}
