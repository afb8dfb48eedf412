use crate::modules::events::core::event::NewEvent;

/// The two records every seeded store starts with, in id order.
pub fn seed_events() -> [NewEvent; 2] {
    [
        NewEvent {
            title: "an event".to_string(),
            description: "something really cool".to_string(),
            location: "Somewhere".to_string(),
            event_date: "01/01/2021".to_string(),
            date: Some("01/01/2021".to_string()),
        },
        NewEvent {
            title: "another event".to_string(),
            description: "something even cooler".to_string(),
            location: "Somewhere Else".to_string(),
            event_date: "02/01/2021".to_string(),
            date: Some("02/01/2021".to_string()),
        },
    ]
}
