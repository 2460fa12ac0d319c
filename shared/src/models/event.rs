use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{NullableField, Resource};

// Request DTOs
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Either a physical or a virtual location
    pub location: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventUpdate {
    #[serde(default)]
    pub title: NullableField<String>,
    #[serde(default)]
    pub description: NullableField<String>,
    #[serde(default)]
    pub start_time: NullableField<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: NullableField<DateTime<Utc>>,
    #[serde(default)]
    pub location: NullableField<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventRead {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventRead {
    /// Builds the stored view with a fresh identifier, stamped at `now`
    pub fn new(event: EventCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: event.title,
            description: event.description,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Resource for EventRead {
    const KIND: &'static str = "Event";

    fn id(&self) -> Uuid {
        self.id
    }
}
