use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::record_events::inbound::http as record_http;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_http::list).post(record_http::add))
        .route("/events/search", get(list_http::search))
        .route("/events/count", get(list_http::count))
        .route(
            "/events/{id}",
            get(list_http::get_by_id)
                .patch(record_http::update)
                .delete(record_http::delete),
        )
        .with_state(state)
}

impl IntoResponse for EventStoreError {
    fn into_response(self) -> Response {
        let status = match self {
            EventStoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            EventStoreError::Backend(_) => {
                tracing::error!(error = %self, "event store unavailable");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
