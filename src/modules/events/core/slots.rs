// Slot collection behind every event store.
//
// Purpose
// - Hold event records keyed by id, leaving a tombstone in place of a deleted record.
//
// Invariants
// - A new record gets `slot count + 1` as id. Tombstones count, so ids are never reused.
// - Listings are ordered newest first by `sort_date`.
//
// Boundaries
// - Synchronous and lock free. Adapters wrap it to provide the async store contract.

use std::collections::BTreeMap;

use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::modules::events::core::fixtures::seed_events;
use crate::shared::core::dates::{create_sort_date, pad_date, today};
use crate::shared::core::event_id::{EventId, parse_event_id};

#[derive(Debug, Clone)]
pub struct EventSlots {
    slots: BTreeMap<EventId, Option<Event>>,
    next_id: EventId,
}

impl Default for EventSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSlots {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn seeded() -> Self {
        let mut slots = Self::new();
        for new_event in seed_events() {
            slots.add(new_event);
        }
        slots
    }

    pub fn add(&mut self, new_event: NewEvent) -> Event {
        let id = self.next_id;
        debug_assert_eq!(id as usize, self.slots.len() + 1);

        let date = match new_event.date {
            Some(date) => pad_date(&date),
            None => today(),
        };
        let event = Event {
            id,
            title: new_event.title,
            description: new_event.description,
            location: new_event.location,
            event_date: new_event.event_date,
            sort_date: create_sort_date(&date),
            date,
            likes: 0,
            dislikes: 0,
        };
        self.slots.insert(id, Some(event.clone()));
        self.next_id += 1;
        event
    }

    /// Live records, newest `sort_date` first. Records sharing a sort date keep id order.
    pub fn events(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self.live().cloned().collect();
        events.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));
        events
    }

    /// Every slot: sorted records first, then one `None` per tombstone.
    pub fn slots(&self) -> Vec<Option<Event>> {
        let tombstones = self.slots.len() - self.live().count();
        self.events()
            .into_iter()
            .map(Some)
            .chain(std::iter::repeat_n(None, tombstones))
            .collect()
    }

    pub fn find(&self, raw_id: &str) -> Option<&Event> {
        let id = parse_event_id(raw_id)?;
        self.slots.get(&id)?.as_ref()
    }

    /// Case-insensitive exact title match, in slot order.
    pub fn find_by_title(&self, title: &str) -> Vec<Event> {
        let title = title.to_lowercase();
        self.live()
            .filter(|event| event.title.to_lowercase() == title)
            .cloned()
            .collect()
    }

    pub fn update(&mut self, raw_id: &str, patch: EventPatch) -> Option<Event> {
        let event = self.live_mut(raw_id)?;
        patch.apply_to(event);
        Some(event.clone())
    }

    pub fn delete(&mut self, raw_id: &str) -> Option<Event> {
        let id = parse_event_id(raw_id)?;
        self.slots.get_mut(&id)?.take()
    }

    pub fn count(&self, include_tombstones: bool) -> usize {
        if include_tombstones {
            self.slots.len()
        } else {
            self.live().count()
        }
    }

    /// Drops the highest slot outright and gives its id back. No-op when empty.
    pub fn delete_last_entry(&mut self) -> Option<EventId> {
        let (id, _) = self.slots.pop_last()?;
        self.next_id = id;
        Some(id)
    }

    fn live(&self) -> impl Iterator<Item = &Event> {
        self.slots.values().flatten()
    }

    fn live_mut(&mut self, raw_id: &str) -> Option<&mut Event> {
        let id = parse_event_id(raw_id)?;
        self.slots.get_mut(&id)?.as_mut()
    }
}
