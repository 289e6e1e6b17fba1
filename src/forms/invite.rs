//! Invite link creation form: description, expiry, single-use flag.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::domain::InvitePayload;

use super::{FieldSpec, FormSchema, FormState, Validator};

pub const DESCRIPTION: &str = "description";
pub const VALID_UNTIL: &str = "valid_until";
pub const SINGLE_USE: &str = "single_use";

static SCHEMA: Lazy<Arc<FormSchema>> = Lazy::new(|| {
    Arc::new(FormSchema::new(
        "invite",
        vec![
            FieldSpec::new(
                DESCRIPTION,
                "Description",
                Validator::Required("description is required"),
            ),
            FieldSpec::new(
                VALID_UNTIL,
                "Valid until",
                Validator::OptionalDateTime("use an RFC 3339 timestamp"),
            ),
            FieldSpec::new(SINGLE_USE, "Single use", Validator::None).with_default("false"),
        ],
    ))
});

/// Fresh form state with the screen's initial defaults.
pub fn new_form() -> FormState {
    FormState::new(SCHEMA.clone())
}

/// Maps validated raw values onto the creation payload.
pub fn commit(form: &FormState) -> InvitePayload {
    InvitePayload {
        description: form.value(DESCRIPTION).trim().to_string(),
        valid_until: DateTime::parse_from_rfc3339(form.value(VALID_UNTIL).trim())
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc)),
        single_use: form.value(SINGLE_USE).eq_ignore_ascii_case("true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_optional() {
        let mut form = new_form();
        form.set_value(DESCRIPTION, "Flatmates");
        assert!(form.validate().is_valid());
        assert!(commit(&form).valid_until.is_none());
    }

    #[test]
    fn malformed_expiry_is_rejected_before_submission() {
        let mut form = new_form();
        form.set_value(DESCRIPTION, "Flatmates");
        form.set_value(VALID_UNTIL, "next week");
        let report = form.validate();
        assert_eq!(report.error(VALID_UNTIL), Some("use an RFC 3339 timestamp"));
    }

    #[test]
    fn commit_parses_expiry_and_flag() {
        let mut form = new_form();
        form.set_value(DESCRIPTION, "Flatmates");
        form.set_value(VALID_UNTIL, "2024-06-01T00:00:00Z");
        form.set_value(SINGLE_USE, "true");
        let payload = commit(&form);
        assert!(payload.valid_until.is_some());
        assert!(payload.single_use);
    }
}
