//! School form draft state and the field registry.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Mutable state of the registration form.
///
/// Every field is a raw string overwritten verbatim on each edit. No
/// validation runs here; the draft is only checked as a whole by
/// [`crate::validation::evaluator::evaluate_draft`] when the form is
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    /// Image URL; the empty string means "no image".
    pub image: String,
}

impl SchoolDraft {
    /// Read the current value of a single field.
    pub fn value(&self, field: SchoolField) -> &str {
        match field {
            SchoolField::Name => &self.name,
            SchoolField::Address => &self.address,
            SchoolField::City => &self.city,
            SchoolField::State => &self.state,
            SchoolField::Contact => &self.contact,
            SchoolField::EmailId => &self.email_id,
            SchoolField::Image => &self.image,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: SchoolField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SchoolField::Name => self.name = value,
            SchoolField::Address => self.address = value,
            SchoolField::City => self.city = value,
            SchoolField::State => self.state = value,
            SchoolField::Contact => self.contact = value,
            SchoolField::EmailId => self.email_id = value,
            SchoolField::Image => self.image = value,
        }
    }

    /// Reset every field to its default (empty) value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The fixed set of fields on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchoolField {
    Name,
    Address,
    City,
    State,
    Contact,
    EmailId,
    Image,
}

impl SchoolField {
    /// All form fields in display order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Address,
        Self::City,
        Self::State,
        Self::Contact,
        Self::EmailId,
        Self::Image,
    ];

    /// Stable field name, used to key validation violations and to map
    /// input names coming from a UI layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Contact => "contact",
            Self::EmailId => "email_id",
            Self::Image => "image",
        }
    }

    /// Parse a field from its stable name.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| CoreError::Validation(format!("Unknown form field: '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_value_round_trip_every_field() {
        let mut draft = SchoolDraft::default();
        for field in SchoolField::ALL {
            draft.set(field, format!("value-{}", field.as_str()));
        }
        for field in SchoolField::ALL {
            assert_eq!(draft.value(field), format!("value-{}", field.as_str()));
        }
    }

    #[test]
    fn clear_resets_to_defaults() {
        let mut draft = SchoolDraft::default();
        draft.set(SchoolField::Name, "Green Valley High");
        draft.set(SchoolField::Image, "https://example.com/a.png");
        draft.clear();
        assert_eq!(draft, SchoolDraft::default());
    }

    #[test]
    fn parse_round_trips_every_field_name() {
        for field in SchoolField::ALL {
            assert_eq!(SchoolField::parse(field.as_str()).unwrap(), field);
        }
    }

    #[test]
    fn parse_rejects_unknown_field() {
        assert!(SchoolField::parse("zip_code").is_err());
    }
}
