use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use directory_shared::{
    merge::Merge,
    models::{now, OrganizationCreate, OrganizationRead, OrganizationUpdate},
};

use super::{JsonBody, ResourceId, ValidatedJson};
use crate::{error::Result, state::AppState};

// POST /organizations
pub async fn create_organization(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrganizationCreate>,
) -> Result<(StatusCode, Json<OrganizationRead>)> {
    let created = state
        .organizations
        .create(OrganizationRead::new(payload, now()))
        .await?;
    tracing::info!("Created organization {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /organizations
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationRead>>> {
    Ok(Json(state.organizations.list().await?))
}

// GET /organizations/:id
pub async fn get_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<OrganizationRead>> {
    Ok(Json(state.organizations.get(&id).await?))
}

// PATCH /organizations/:id
pub async fn update_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonBody(update): JsonBody<OrganizationUpdate>,
) -> Result<Json<OrganizationRead>> {
    let current = state.organizations.get(&id).await?;
    let merged = update.merge_into(&current, now())?;
    let updated = state.organizations.update(merged).await?;
    tracing::info!("Updated organization {}", id);

    Ok(Json(updated))
}

// DELETE /organizations/:id
pub async fn delete_organization(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode> {
    state.organizations.delete(&id).await?;
    tracing::info!("Deleted organization {}", id);

    Ok(StatusCode::NO_CONTENT)
}
