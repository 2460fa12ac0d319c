//! Query-string filters for list endpoints.
//!
//! Every criterion is optional. A value matches a query when all supplied
//! criteria match; an empty query keeps everything in its original order.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::models::{AddressRead, EventRead, PersonRead};

/// A set of criteria that can be checked against one stored value
pub trait Criteria<T> {
    fn matches(&self, item: &T, now: DateTime<Utc>) -> bool;
}

/// Returns the ordered subsequence of `items` matching `criteria` at instant `now`
pub fn apply<T, C>(items: Vec<T>, criteria: &C, now: DateTime<Utc>) -> Vec<T>
where
    C: Criteria<T>,
{
    items
        .into_iter()
        .filter(|item| criteria.matches(item, now))
        .collect()
}

fn equals(criterion: &Option<String>, value: &str) -> bool {
    criterion.as_deref().map_or(true, |expected| expected == value)
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AddressQuery {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Criteria<AddressRead> for AddressQuery {
    fn matches(&self, address: &AddressRead, _now: DateTime<Utc>) -> bool {
        equals(&self.street, &address.street)
            && equals(&self.city, &address.city)
            && equals(&self.state, &address.state)
            && equals(&self.postal_code, &address.postal_code)
            && equals(&self.country, &address.country)
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PersonQuery {
    pub uni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Compared against the stored date rendered as `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// Matches if any embedded address is in this city
    pub city: Option<String>,
    /// Matches if any embedded address is in this country
    pub country: Option<String>,
}

impl Criteria<PersonRead> for PersonQuery {
    fn matches(&self, person: &PersonRead, _now: DateTime<Utc>) -> bool {
        let birth_date = person.birth_date.format("%Y-%m-%d").to_string();

        equals(&self.uni, &person.uni)
            && equals(&self.first_name, &person.first_name)
            && equals(&self.last_name, &person.last_name)
            && equals(&self.email, &person.email)
            && equals(&self.phone, &person.phone)
            && equals(&self.birth_date, &birth_date)
            && self.city.as_deref().map_or(true, |city| {
                person.addresses.iter().any(|a| a.city == city)
            })
            && self.country.as_deref().map_or(true, |country| {
                person.addresses.iter().any(|a| a.country == country)
            })
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Only events whose start time is still in the future
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub upcoming: Option<bool>,
}

/// Accepts the usual query-string spellings of a boolean, case-insensitively
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(Some(true)),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(Some(false)),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"a boolean flag such as true, false, 1, 0, yes, no, on or off",
        )),
    }
}

impl Criteria<EventRead> for EventQuery {
    fn matches(&self, event: &EventRead, now: DateTime<Utc>) -> bool {
        let title_matches = self.title.as_deref().map_or(true, |title| {
            event.title.to_lowercase().contains(&title.to_lowercase())
        });

        // end_time is deliberately not consulted
        let upcoming_matches = !self.upcoming.unwrap_or(false) || event.start_time > now;

        title_matches && upcoming_matches
    }
}
