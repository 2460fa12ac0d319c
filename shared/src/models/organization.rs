use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{NullableField, Resource};

// Request DTOs
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct OrganizationCreate {
    pub name: String,
    /// College, company, club, ...
    pub org_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrganizationUpdate {
    #[serde(default)]
    pub name: NullableField<String>,
    #[serde(default, alias = "type")]
    pub org_type: NullableField<String>,
    #[serde(default)]
    pub description: NullableField<String>,
    #[serde(default)]
    pub website: NullableField<String>,
    #[serde(default)]
    pub email: NullableField<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct OrganizationRead {
    pub id: Uuid,
    pub name: String,
    pub org_type: String,
    pub description: Option<String>,
    pub website: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrganizationRead {
    /// Builds the stored view with a fresh identifier, stamped at `now`
    pub fn new(org: OrganizationCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: org.name,
            org_type: org.org_type,
            description: org.description,
            website: org.website,
            email: org.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Resource for OrganizationRead {
    const KIND: &'static str = "Organization";

    fn id(&self) -> Uuid {
        self.id
    }
}
