// Result envelopes returned by the event store. Their JSON shapes are what the events API
// exposes: `{events}`, `{event}`, `{deletedEvent}` and `{count}`.

use serde::Serialize;

use crate::modules::events::core::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsListing {
    pub events: Vec<Event>,
}

/// Every slot, tombstones included as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotsListing {
    pub events: Vec<Option<Event>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLookup {
    pub event: Option<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEnvelope {
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEventEnvelope {
    pub deleted_event: Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventsCount {
    pub count: usize,
}

/// Outcome of a mutating operation: the full listing or just the touched record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Mutation<T> {
    Listing(EventsListing),
    Record(T),
}

impl<T> Mutation<T> {
    pub fn record(self) -> Option<T> {
        match self {
            Mutation::Record(record) => Some(record),
            Mutation::Listing(_) => None,
        }
    }

    pub fn listing(self) -> Option<EventsListing> {
        match self {
            Mutation::Listing(listing) => Some(listing),
            Mutation::Record(_) => None,
        }
    }
}
