//! School entity model and create DTO.

use schoolbook_core::school::SchoolDraft;
use schoolbook_core::types::{SchoolId, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored school directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    /// Image URL; the empty string means "no image".
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for appending a school record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: String,
}

impl From<&SchoolDraft> for NewSchool {
    fn from(draft: &SchoolDraft) -> Self {
        Self {
            name: draft.name.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            contact: draft.contact.clone(),
            email_id: draft.email_id.clone(),
            image: draft.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_school_copies_every_draft_field() {
        let draft = SchoolDraft {
            name: "Green Valley High".into(),
            address: "123 Oak Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            contact: "1234567890".into(),
            email_id: "info@gvh.edu".into(),
            image: "https://example.com/a.png".into(),
        };

        let new = NewSchool::from(&draft);
        assert_eq!(new.name, "Green Valley High");
        assert_eq!(new.address, "123 Oak Street");
        assert_eq!(new.city, "Springfield");
        assert_eq!(new.state, "IL");
        assert_eq!(new.contact, "1234567890");
        assert_eq!(new.email_id, "info@gvh.edu");
        assert_eq!(new.image, "https://example.com/a.png");
    }

    /// Listing consumers receive the stored entity as JSON; the id and
    /// creation timestamp must serialize alongside the form fields.
    #[test]
    fn school_serializes_all_fields() {
        let school = School {
            id: uuid::Uuid::nil(),
            name: "Green Valley High".into(),
            address: "123 Oak Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            contact: "1234567890".into(),
            email_id: "info@gvh.edu".into(),
            image: String::new(),
            created_at: chrono::DateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&school).expect("serialization should succeed");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Green Valley High");
        assert_eq!(json["contact"], "1234567890");
        assert_eq!(json["image"], "");
        assert!(json["created_at"].is_string());
    }
}
