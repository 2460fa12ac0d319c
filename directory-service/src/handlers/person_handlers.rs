use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use directory_shared::{
    filter::{self, PersonQuery},
    merge::Merge,
    models::{now, PersonCreate, PersonRead, PersonUpdate},
};

use super::{JsonBody, QueryParams, ResourceId, ValidatedJson};
use crate::{error::Result, state::AppState};

// POST /persons
pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PersonCreate>,
) -> Result<(StatusCode, Json<PersonRead>)> {
    let person = PersonRead::from(payload);
    person.check_address_ids()?;
    tracing::debug!(
        "Creating person {} with {} address(es)",
        person.id,
        person.addresses.len()
    );

    let created = state.persons.create(person).await?;
    tracing::info!("Created person {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /persons
pub async fn list_persons(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PersonQuery>,
) -> Result<Json<Vec<PersonRead>>> {
    tracing::debug!("Listing persons with filter {:?}", query);
    let persons = state.persons.list().await?;

    Ok(Json(filter::apply(persons, &query, now())))
}

// GET /persons/:id
pub async fn get_person(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<PersonRead>> {
    Ok(Json(state.persons.get(&id).await?))
}

// PATCH /persons/:id
pub async fn update_person(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonBody(update): JsonBody<PersonUpdate>,
) -> Result<Json<PersonRead>> {
    let current = state.persons.get(&id).await?;
    let merged = update.merge_into(&current, now())?;
    let updated = state.persons.update(merged).await?;
    tracing::info!("Updated person {}", id);

    Ok(Json(updated))
}
