use crate::modules::events::core::event::EventPatch;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::tests::fixtures::events::new_event::NewEventBuilder;
use std::sync::Arc;

#[tokio::test]
async fn seeded_store_lists_newest_first_and_accepts_new_events() {
    let store: Arc<dyn EventStore> = Arc::new(InMemoryEventStore::new());

    let listing = store.get_events().await.unwrap();
    let ids: Vec<u64> = listing.events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let added = store
        .add_event(NewEventBuilder::new().title("x").date("3/4/2022").build(), false)
        .await
        .unwrap()
        .record()
        .unwrap()
        .event;
    assert_eq!(added.id, 3);
    assert_eq!(added.date, "03/04/2022");
    assert_eq!(added.sort_date, "2022-03-04");

    let listing = store.get_events().await.unwrap();
    assert_eq!(listing.events[0], added);
}

#[tokio::test]
async fn ids_keep_counting_through_deletes_and_cleanup() {
    let store = InMemoryEventStore::new();

    for expected_id in 3..=5 {
        let event = store
            .add_event(NewEventBuilder::new().without_date().build(), false)
            .await
            .unwrap()
            .record()
            .unwrap()
            .event;
        assert_eq!(event.id, expected_id);
    }

    store.delete_event("4", true).await.unwrap();
    assert_eq!(store.get_events_count(true).await.unwrap().count, 5);
    assert_eq!(store.get_events_count(false).await.unwrap().count, 4);
    assert_eq!(store.get_event_slots().await.unwrap().events.len(), 5);

    let next = store
        .add_event(NewEventBuilder::new().build(), false)
        .await
        .unwrap()
        .record()
        .unwrap()
        .event;
    assert_eq!(next.id, 6);

    store.delete_last_entry().await.unwrap();
    assert_eq!(store.get_events_count(true).await.unwrap().count, 5);
    assert_eq!(store.get_event_by_id("6").await.unwrap().event, None);
}

#[tokio::test]
async fn likes_are_recorded_through_patches() {
    let store = InMemoryEventStore::new();
    let current = store.get_event_by_id("1").await.unwrap().event.unwrap();

    let patch = EventPatch {
        likes: Some(current.likes + 1),
        ..EventPatch::default()
    };
    let listing = store
        .update_event("1", patch, true)
        .await
        .unwrap()
        .listing()
        .unwrap();

    let liked = listing.events.iter().find(|e| e.id == 1).unwrap();
    assert_eq!(liked.likes, 1);
    assert_eq!(liked.dislikes, 0);
    assert!(listing.events.windows(2).all(|w| w[0].sort_date >= w[1].sort_date));
}
