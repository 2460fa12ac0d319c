use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use directory_shared::{
    filter::{self, EventQuery},
    merge::Merge,
    models::{now, EventCreate, EventRead, EventUpdate},
};

use super::{JsonBody, QueryParams, ResourceId, ValidatedJson};
use crate::{error::Result, state::AppState};

// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EventCreate>,
) -> Result<(StatusCode, Json<EventRead>)> {
    let created = state.events.create(EventRead::new(payload, now())).await?;
    tracing::info!("Created event {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EventQuery>,
) -> Result<Json<Vec<EventRead>>> {
    tracing::debug!("Listing events with filter {:?}", query);
    let events = state.events.list().await?;

    Ok(Json(filter::apply(events, &query, now())))
}

// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<EventRead>> {
    Ok(Json(state.events.get(&id).await?))
}

// PATCH /events/:id
pub async fn update_event(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonBody(update): JsonBody<EventUpdate>,
) -> Result<Json<EventRead>> {
    let current = state.events.get(&id).await?;
    let merged = update.merge_into(&current, now())?;
    let updated = state.events.update(merged).await?;
    tracing::info!("Updated event {}", id);

    Ok(Json(updated))
}

// DELETE /events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode> {
    state.events.delete(&id).await?;
    tracing::info!("Deleted event {}", id);

    Ok(StatusCode::NO_CONTENT)
}
