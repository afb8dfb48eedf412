// Shared test fixture for NewEvent payloads, loaded from `json/new_event.json`.

use crate::modules::events::core::event::NewEvent;

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEventBuilder {
    pub fn new() -> Self {
        let inner: NewEvent = serde_json::from_str(include_str!("json/new_event.json"))
            .expect("new_event.json fixture should parse");
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn event_date(mut self, v: impl Into<String>) -> Self {
        self.inner.event_date = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn without_date(mut self) -> Self {
        self.inner.date = None;
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod new_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewEventBuilder::default().build();
        assert_eq!(built.title, "launch party");
        assert_eq!(built.description, "celebrating the release");
        assert_eq!(built.location, "Rooftop");
        assert_eq!(built.event_date, "3/4/2022");
        assert_eq!(built.date.as_deref(), Some("3/4/2022"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NewEventBuilder::new()
            .title("t")
            .description("d")
            .location("l")
            .event_date("1/1/2000")
            .date("2/2/2000")
            .build();
        assert_eq!(custom.title, "t");
        assert_eq!(custom.description, "d");
        assert_eq!(custom.location, "l");
        assert_eq!(custom.event_date, "1/1/2000");
        assert_eq!(custom.date.as_deref(), Some("2/2/2000"));
        assert_eq!(NewEventBuilder::new().without_date().build().date, None);
    }
}
