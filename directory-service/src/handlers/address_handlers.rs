use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use directory_shared::{
    filter::{self, AddressQuery},
    merge::Merge,
    models::{now, AddressCreate, AddressRead, AddressUpdate},
};

use super::{JsonBody, QueryParams, ResourceId, ValidatedJson};
use crate::{error::Result, state::AppState};

// POST /addresses
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddressCreate>,
) -> Result<(StatusCode, Json<AddressRead>)> {
    // A caller-supplied id that is already taken is rejected by the store
    let created = state.addresses.create(AddressRead::from(payload)).await?;
    tracing::info!("Created address {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AddressQuery>,
) -> Result<Json<Vec<AddressRead>>> {
    tracing::debug!("Listing addresses with filter {:?}", query);
    let addresses = state.addresses.list().await?;

    Ok(Json(filter::apply(addresses, &query, now())))
}

// GET /addresses/:id
pub async fn get_address(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<AddressRead>> {
    Ok(Json(state.addresses.get(&id).await?))
}

// PATCH /addresses/:id
pub async fn update_address(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonBody(update): JsonBody<AddressUpdate>,
) -> Result<Json<AddressRead>> {
    let current = state.addresses.get(&id).await?;
    let merged = update.merge_into(&current, now())?;
    let updated = state.addresses.update(merged).await?;
    tracing::info!("Updated address {}", id);

    Ok(Json(updated))
}
