use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{Result, ServiceError};

use super::{AddressCreate, AddressRead, NullableField, Resource};

// Request DTOs
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct PersonCreate {
    /// Optional caller-chosen identifier; generated when omitted
    #[serde(default)]
    pub id: Option<Uuid>,
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<AddressCreate>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PersonUpdate {
    #[serde(default)]
    pub uni: NullableField<String>,
    #[serde(default)]
    pub first_name: NullableField<String>,
    #[serde(default)]
    pub last_name: NullableField<String>,
    #[serde(default)]
    pub email: NullableField<String>,
    #[serde(default)]
    pub phone: NullableField<String>,
    #[serde(default)]
    pub birth_date: NullableField<NaiveDate>,
    /// Replaces the whole address list when present
    #[serde(default)]
    pub addresses: NullableField<Vec<AddressCreate>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct PersonRead {
    pub id: Uuid,
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub addresses: Vec<AddressRead>,
}

impl PersonRead {
    /// Rejects an address list that repeats an identifier
    pub fn check_address_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        match self.addresses.iter().find(|address| !seen.insert(address.id)) {
            Some(address) => Err(ServiceError::AlreadyExists(format!(
                "Address with ID {} already exists",
                address.id
            ))),
            None => Ok(()),
        }
    }
}

impl From<PersonCreate> for PersonRead {
    fn from(person: PersonCreate) -> Self {
        Self {
            id: person.id.unwrap_or_else(Uuid::new_v4),
            uni: person.uni,
            first_name: person.first_name,
            last_name: person.last_name,
            email: person.email,
            phone: person.phone,
            birth_date: person.birth_date,
            addresses: person.addresses.into_iter().map(AddressRead::from).collect(),
        }
    }
}

impl Resource for PersonRead {
    const KIND: &'static str = "Person";

    fn id(&self) -> Uuid {
        self.id
    }
}
