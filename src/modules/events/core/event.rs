use serde::{Deserialize, Serialize};

use crate::shared::core::event_id::EventId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    /// `MM/DD/YYYY`, zero-padded.
    pub date: String,
    /// `YYYY-MM-DD`, only used for ordering.
    pub sort_date: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// Caller supplied part of an event. Missing text fields are stored as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub date: Option<String>,
}

/// Shallow patch: present fields overwrite, absent fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub date: Option<String>,
    pub sort_date: Option<String>,
    pub likes: Option<i64>,
    pub dislikes: Option<i64>,
}

impl EventPatch {
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(event_date) = self.event_date {
            event.event_date = event_date;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(sort_date) = self.sort_date {
            event.sort_date = sort_date;
        }
        if let Some(likes) = self.likes {
            event.likes = likes;
        }
        if let Some(dislikes) = self.dislikes {
            event.dislikes = dislikes;
        }
    }
}
