use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{NullableField, Resource};

// Request DTOs
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct AddressCreate {
    /// Optional caller-chosen identifier; generated when omitted
    #[serde(default)]
    pub id: Option<Uuid>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AddressUpdate {
    #[serde(default)]
    pub street: NullableField<String>,
    #[serde(default)]
    pub city: NullableField<String>,
    #[serde(default)]
    pub state: NullableField<String>,
    #[serde(default)]
    pub postal_code: NullableField<String>,
    #[serde(default)]
    pub country: NullableField<String>,
}

// Read view, also embedded in persons
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressRead {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl From<AddressCreate> for AddressRead {
    fn from(address: AddressCreate) -> Self {
        Self {
            id: address.id.unwrap_or_else(Uuid::new_v4),
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
        }
    }
}

impl Resource for AddressRead {
    const KIND: &'static str = "Address";

    fn id(&self) -> Uuid {
        self.id
    }
}
