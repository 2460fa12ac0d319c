//! Partial-update merging.
//!
//! An update payload only touches the fields it names. Absent fields keep
//! their stored value, `null` clears optional fields and is rejected on
//! required ones. Nothing is returned unless every field merged cleanly, so a
//! failed merge never reaches the store.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::error::{flatten_validation_errors, FieldError, Result, ServiceError};
use crate::models::{
    AddressRead, AddressUpdate, EventRead, EventUpdate, NullableField, OrganizationRead,
    OrganizationUpdate, PersonRead, PersonUpdate,
};

/// A sparse update that can be laid over a stored value of type `T`
pub trait Merge<T> {
    /// Produces the new stored value; `now` stamps `updated_at` where tracked
    fn merge_into(self, current: &T, now: DateTime<Utc>) -> Result<T>;
}

#[derive(Default)]
struct Merger {
    errors: Vec<FieldError>,
}

impl Merger {
    fn required<T>(&mut self, field: &str, target: &mut T, patch: NullableField<T>) {
        match patch {
            NullableField::NotPresent => {}
            NullableField::Null => self.errors.push(FieldError::new(field, "cannot be null")),
            NullableField::Value(value) => *target = value,
        }
    }

    fn optional<T>(&mut self, target: &mut Option<T>, patch: NullableField<T>) {
        match patch {
            NullableField::NotPresent => {}
            NullableField::Null => *target = None,
            NullableField::Value(value) => *target = Some(value),
        }
    }

    fn check(&mut self, merged: &impl Validate) {
        if let Err(errors) = merged.validate() {
            self.errors.extend(flatten_validation_errors(&errors));
        }
    }

    fn finish<T>(self, merged: T) -> Result<T> {
        if self.errors.is_empty() {
            Ok(merged)
        } else {
            Err(ServiceError::ValidationError(self.errors))
        }
    }
}

impl Merge<AddressRead> for AddressUpdate {
    fn merge_into(self, current: &AddressRead, _now: DateTime<Utc>) -> Result<AddressRead> {
        let mut merged = current.clone();
        let mut merger = Merger::default();

        merger.required("street", &mut merged.street, self.street);
        merger.required("city", &mut merged.city, self.city);
        merger.required("state", &mut merged.state, self.state);
        merger.required("postal_code", &mut merged.postal_code, self.postal_code);
        merger.required("country", &mut merged.country, self.country);

        merger.finish(merged)
    }
}

impl Merge<PersonRead> for PersonUpdate {
    fn merge_into(self, current: &PersonRead, _now: DateTime<Utc>) -> Result<PersonRead> {
        let mut merged = current.clone();
        let mut merger = Merger::default();

        merger.required("uni", &mut merged.uni, self.uni);
        merger.required("first_name", &mut merged.first_name, self.first_name);
        merger.required("last_name", &mut merged.last_name, self.last_name);
        merger.required("email", &mut merged.email, self.email);
        merger.required("phone", &mut merged.phone, self.phone);
        merger.required("birth_date", &mut merged.birth_date, self.birth_date);
        merger.required(
            "addresses",
            &mut merged.addresses,
            self.addresses
                .map(|addresses| addresses.into_iter().map(AddressRead::from).collect()),
        );

        merger.check(&merged);

        let merged = merger.finish(merged)?;
        merged.check_address_ids()?;
        Ok(merged)
    }
}

impl Merge<EventRead> for EventUpdate {
    fn merge_into(self, current: &EventRead, now: DateTime<Utc>) -> Result<EventRead> {
        let mut merged = current.clone();
        let mut merger = Merger::default();

        merger.required("title", &mut merged.title, self.title);
        merger.required("description", &mut merged.description, self.description);
        merger.required("start_time", &mut merged.start_time, self.start_time);
        merger.required("end_time", &mut merged.end_time, self.end_time);
        merger.required("location", &mut merged.location, self.location);
        merged.updated_at = now;

        merger.finish(merged)
    }
}

impl Merge<OrganizationRead> for OrganizationUpdate {
    fn merge_into(
        self,
        current: &OrganizationRead,
        now: DateTime<Utc>,
    ) -> Result<OrganizationRead> {
        let mut merged = current.clone();
        let mut merger = Merger::default();

        merger.required("name", &mut merged.name, self.name);
        merger.required("org_type", &mut merged.org_type, self.org_type);
        merger.optional(&mut merged.description, self.description);
        merger.optional(&mut merged.website, self.website);
        merger.optional(&mut merged.email, self.email);
        merged.updated_at = now;
        merger.check(&merged);

        merger.finish(merged)
    }
}
