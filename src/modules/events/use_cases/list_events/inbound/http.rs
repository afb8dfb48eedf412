use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub include_tombstones: Option<bool>,
}

#[derive(Deserialize)]
pub struct SearchEventsParams {
    pub title: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    if params.include_tombstones.unwrap_or(false) {
        return match state.store.get_event_slots().await {
            Ok(slots) => Json(slots).into_response(),
            Err(error) => error.into_response(),
        };
    }
    match state.store.get_events().await {
        Ok(listing) => Json(listing).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchEventsParams>,
) -> impl IntoResponse {
    match state.store.get_events_by_title(&params.title).await {
        Ok(listing) => Json(listing).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    match state
        .store
        .get_events_count(params.include_tombstones.unwrap_or(true))
        .await
    {
        Ok(count) => Json(count).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.get_event_by_id(&id).await {
        Ok(lookup) => Json(lookup).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_events_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::event_store::EventStore;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shell::state::AppState;

    use super::{count, get_by_id, list, search};

    fn app(store: Arc<InMemoryEventStore>) -> Router {
        Router::new()
            .route("/events", get(list))
            .route("/events/search", get(search))
            .route("/events/count", get(count))
            .route("/events/{id}", get(get_by_id))
            .with_state(AppState::new(store))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn it_should_list_the_seeded_events_newest_first() {
        let (status, json) = get_json(app(Arc::new(InMemoryEventStore::new())), "/events").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["events"][0]["id"], 2);
        assert_eq!(json["events"][1]["id"], 1);
        assert_eq!(json["events"][0]["sortDate"], "2021-02-01");
    }

    #[tokio::test]
    async fn it_should_include_tombstones_when_asked() {
        let store = Arc::new(InMemoryEventStore::new());
        store.delete_event("1", false).await.unwrap();
        let (_, json) = get_json(app(store), "/events?include_tombstones=true").await;
        assert_eq!(json["events"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["events"][1], Value::Null);
    }

    #[tokio::test]
    async fn it_should_search_by_title() {
        let (status, json) = get_json(
            app(Arc::new(InMemoryEventStore::new())),
            "/events/search?title=An%20Event",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["events"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["events"][0]["title"], "an event");
    }

    #[tokio::test]
    async fn it_should_count_slots_by_default() {
        let store = Arc::new(InMemoryEventStore::new());
        store.delete_event("2", false).await.unwrap();
        let (_, json) = get_json(app(store.clone()), "/events/count").await;
        assert_eq!(json, json!({ "count": 2 }));
        let (_, json) = get_json(app(store), "/events/count?include_tombstones=false").await;
        assert_eq!(json, json!({ "count": 1 }));
    }

    #[tokio::test]
    async fn it_should_return_null_for_an_unknown_id() {
        let (status, json) = get_json(app(Arc::new(InMemoryEventStore::new())), "/events/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "event": null }));
    }

    #[tokio::test]
    async fn it_should_return_500_when_event_store_is_offline() {
        let mut store = InMemoryEventStore::new();
        store.toggle_offline();
        let (status, _) = get_json(app(Arc::new(store)), "/events").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
