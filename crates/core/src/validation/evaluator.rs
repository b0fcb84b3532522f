//! Per-field validators and the draft evaluator. Pure logic, no I/O.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use super::rules::{FieldViolation, ValidationReport};
use crate::school::{SchoolDraft, SchoolField};

/// Minimum length (in characters) for the name, city, and state fields.
const MIN_NAME_LEN: usize = 2;

/// Minimum length (in characters) for the address field.
const MIN_ADDRESS_LEN: usize = 5;

/// Contact numbers are exactly 10 ASCII digits, nothing else.
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{10}$").expect("contact pattern must compile"));

/// Validate a whole draft, collecting at most one violation per field.
///
/// Fields are checked in display order, so violation order is stable.
pub fn evaluate_draft(draft: &SchoolDraft) -> ValidationReport {
    let violations: Vec<FieldViolation> = [
        validate_name(&draft.name),
        validate_address(&draft.address),
        validate_city(&draft.city),
        validate_state(&draft.state),
        validate_contact(&draft.contact),
        validate_email_id(&draft.email_id),
        validate_image(&draft.image),
    ]
    .into_iter()
    .flatten()
    .collect();

    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
    }
}

pub fn validate_name(value: &str) -> Option<FieldViolation> {
    min_chars(SchoolField::Name, value, MIN_NAME_LEN, "School name")
}

pub fn validate_address(value: &str) -> Option<FieldViolation> {
    min_chars(SchoolField::Address, value, MIN_ADDRESS_LEN, "Address")
}

pub fn validate_city(value: &str) -> Option<FieldViolation> {
    min_chars(SchoolField::City, value, MIN_NAME_LEN, "City")
}

pub fn validate_state(value: &str) -> Option<FieldViolation> {
    min_chars(SchoolField::State, value, MIN_NAME_LEN, "State")
}

pub fn validate_contact(value: &str) -> Option<FieldViolation> {
    if CONTACT_RE.is_match(value) {
        None
    } else {
        Some(FieldViolation::new(
            SchoolField::Contact,
            "Contact number must be exactly 10 digits",
        ))
    }
}

pub fn validate_email_id(value: &str) -> Option<FieldViolation> {
    if value.validate_email() {
        None
    } else {
        Some(FieldViolation::new(
            SchoolField::EmailId,
            "A valid email address is required",
        ))
    }
}

/// The image field is optional: empty passes, anything else must be a
/// syntactically valid URL. Whether the URL resolves to an actual image is
/// the view layer's problem.
pub fn validate_image(value: &str) -> Option<FieldViolation> {
    if value.is_empty() || value.validate_url() {
        None
    } else {
        Some(FieldViolation::new(
            SchoolField::Image,
            "Image must be a valid URL",
        ))
    }
}

/// First failing rule for minimum-length text fields. Length is measured in
/// characters, not bytes, so multibyte names are not over-rejected.
fn min_chars(
    field: SchoolField,
    value: &str,
    min: usize,
    label: &str,
) -> Option<FieldViolation> {
    if value.chars().count() < min {
        Some(FieldViolation::new(
            field,
            format!("{label} must be at least {min} characters"),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SchoolDraft {
        SchoolDraft {
            name: "Green Valley High".into(),
            address: "123 Oak Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            contact: "1234567890".into(),
            email_id: "info@gvh.edu".into(),
            image: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let report = evaluate_draft(&valid_draft());
        assert!(report.is_valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "G".into();
        let report = evaluate_draft(&draft);
        assert!(!report.is_valid);
        assert!(report.has_violation(SchoolField::Name));
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn empty_name_yields_single_violation() {
        // First failing rule wins: empty string fails the length rule once,
        // not once per conceptual rule.
        let mut draft = valid_draft();
        draft.name = String::new();
        let report = evaluate_draft(&draft);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "name");
    }

    #[test]
    fn short_address_is_rejected() {
        let mut draft = valid_draft();
        draft.address = "1234".into();
        assert!(evaluate_draft(&draft).has_violation(SchoolField::Address));
    }

    #[test]
    fn multibyte_city_is_measured_in_characters() {
        let mut draft = valid_draft();
        draft.city = "Åß".into(); // 2 chars, 4 bytes
        assert!(evaluate_draft(&draft).is_valid);
    }

    #[test]
    fn contact_rejects_wrong_length_and_non_digits() {
        for bad in ["123456789", "12345678901", "12345abcde", "123 456 789", ""] {
            let violation = validate_contact(bad);
            assert!(violation.is_some(), "contact {bad:?} should be rejected");
            assert_eq!(violation.unwrap().field, "contact");
        }
        assert!(validate_contact("1234567890").is_none());
    }

    #[test]
    fn email_syntax_is_enforced() {
        assert!(validate_email_id("info").is_some());
        assert!(validate_email_id("").is_some());
        assert!(validate_email_id("info@gvh.edu").is_none());
    }

    #[test]
    fn image_is_optional_but_must_be_a_url_when_present() {
        assert!(validate_image("").is_none());
        assert!(validate_image("https://example.com/a.png").is_none());
        assert!(validate_image("not a url").is_some());
    }

    #[test]
    fn violations_follow_display_order() {
        let draft = SchoolDraft::default();
        let report = evaluate_draft(&draft);
        let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
        // Every required field fails on an empty draft; image is optional.
        assert_eq!(
            fields,
            vec!["name", "address", "city", "state", "contact", "email_id"]
        );
    }

    #[test]
    fn message_for_returns_the_field_message() {
        let mut draft = valid_draft();
        draft.contact = "42".into();
        let report = evaluate_draft(&draft);
        assert_eq!(
            report.message_for(SchoolField::Contact),
            Some("Contact number must be exactly 10 digits")
        );
        assert_eq!(report.message_for(SchoolField::Name), None);
    }

    #[test]
    fn report_serializes_violations() {
        let mut draft = valid_draft();
        draft.email_id = "nope".into();
        let report = evaluate_draft(&draft);
        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["violations"][0]["field"], "email_id");
    }
}
