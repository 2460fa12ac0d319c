use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::FieldError;

pub mod address;
pub mod event;
pub mod health;
pub mod nullable;
pub mod organization;
pub mod person;

pub use address::{AddressCreate, AddressRead, AddressUpdate};
pub use event::{EventCreate, EventRead, EventUpdate};
pub use health::Health;
pub use nullable::NullableField;
pub use organization::{OrganizationCreate, OrganizationRead, OrganizationUpdate};
pub use person::{PersonCreate, PersonRead, PersonUpdate};

/// A stored read view, addressable by its identifier
pub trait Resource: Clone + Send + Sync + 'static {
    /// Name used in log lines and error messages
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// Helper function to get the current instant
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
