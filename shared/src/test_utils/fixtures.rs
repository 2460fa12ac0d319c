use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{AddressRead, EventRead, OrganizationRead, PersonRead};

/// An address with a fresh identifier in the given city and country
pub fn sample_address(city: &str, country: &str) -> AddressRead {
    AddressRead {
        id: Uuid::new_v4(),
        street: "116th St & Broadway".into(),
        city: city.into(),
        state: "NY".into(),
        postal_code: "10027".into(),
        country: country.into(),
    }
}

/// A person with no addresses
pub fn sample_person(uni: &str) -> PersonRead {
    PersonRead {
        id: Uuid::new_v4(),
        uni: uni.into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: format!("{}@columbia.edu", uni),
        phone: "+1-212-555-0199".into(),
        birth_date: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
        addresses: vec![],
    }
}

/// A two hour event starting at `start_time`
pub fn sample_event(title: &str, start_time: DateTime<Utc>) -> EventRead {
    let now = Utc::now();
    EventRead {
        id: Uuid::new_v4(),
        title: title.into(),
        description: "Detailed conversations about the impact of AI".into(),
        start_time,
        end_time: start_time + Duration::hours(2),
        location: "Mudd Building Lobby".into(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_organization(name: &str) -> OrganizationRead {
    let now = Utc::now();
    OrganizationRead {
        id: Uuid::new_v4(),
        name: name.into(),
        org_type: "University".into(),
        description: Some("A top-tier computer science department.".into()),
        website: Some("https://www.cs.columbia.edu".into()),
        email: Some("info@cs.columbia.edu".into()),
        created_at: now,
        updated_at: now,
    }
}
