use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::event::{EventPatch, NewEvent};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReturnParams {
    pub return_all: Option<bool>,
}

impl ReturnParams {
    fn return_all(&self) -> bool {
        self.return_all.unwrap_or(true)
    }
}

pub async fn add(
    State(state): State<AppState>,
    Query(params): Query<ReturnParams>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.store.add_event(new_event, params.return_all()).await {
        Ok(mutation) => (StatusCode::CREATED, Json(mutation)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ReturnParams>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .store
        .update_event(&id, patch, params.return_all())
        .await
    {
        Ok(mutation) => Json(mutation).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ReturnParams>,
) -> impl IntoResponse {
    match state.store.delete_event(&id, params.return_all()).await {
        Ok(mutation) => Json(mutation).into_response(),
        Err(error) => error.into_response(),
    }
}
