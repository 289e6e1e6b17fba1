//! Group creation form: name, description, currency, terms, join flag.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::GroupPayload;

use super::{FieldSpec, FormSchema, FormState, Validator};

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const CURRENCY_SYMBOL: &str = "currency_symbol";
pub const TERMS: &str = "terms";
pub const ADD_USER_ACCOUNT_ON_JOIN: &str = "add_user_account_on_join";

// Symbols and ISO codes only; anything longer is almost certainly a typo.
fn currency_rule(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("currency is required".into());
    }
    if trimmed.chars().count() > 3 {
        return Err("use a short currency symbol".into());
    }
    Ok(())
}

static SCHEMA: Lazy<Arc<FormSchema>> = Lazy::new(|| {
    Arc::new(FormSchema::new(
        "group",
        vec![
            FieldSpec::new(NAME, "Name", Validator::Required("name is required")),
            FieldSpec::new(DESCRIPTION, "Description", Validator::None),
            FieldSpec::new(
                CURRENCY_SYMBOL,
                "Currency",
                Validator::Custom(Arc::new(currency_rule)),
            )
            .with_default("€"),
            FieldSpec::new(TERMS, "Terms", Validator::None),
            FieldSpec::new(
                ADD_USER_ACCOUNT_ON_JOIN,
                "Add user accounts on join",
                Validator::None,
            )
            .with_default("false"),
        ],
    ))
});

/// Fresh form state with the screen's initial defaults.
pub fn new_form() -> FormState {
    FormState::new(SCHEMA.clone())
}

/// Maps validated raw values onto the creation payload.
pub fn commit(form: &FormState) -> GroupPayload {
    GroupPayload {
        name: form.value(NAME).trim().to_string(),
        description: form.value(DESCRIPTION).trim().to_string(),
        currency_symbol: form.value(CURRENCY_SYMBOL).trim().to_string(),
        terms: form.value(TERMS).trim().to_string(),
        add_user_account_on_join: form
            .value(ADD_USER_ACCOUNT_ON_JOIN)
            .eq_ignore_ascii_case("true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_fails_validation() {
        let form = new_form();
        let report = form.validate();
        assert_eq!(report.error(NAME), Some("name is required"));
        assert!(report.error(DESCRIPTION).is_none());
    }

    #[test]
    fn blank_currency_fails_validation() {
        let mut form = new_form();
        form.set_value(NAME, "Trip");
        form.set_value(CURRENCY_SYMBOL, "   ");
        let report = form.validate();
        assert_eq!(report.error(CURRENCY_SYMBOL), Some("currency is required"));
    }

    #[test]
    fn long_currency_input_fails_validation() {
        let mut form = new_form();
        form.set_value(NAME, "Trip");
        form.set_value(CURRENCY_SYMBOL, "doubloons");
        let report = form.validate();
        assert_eq!(
            report.error(CURRENCY_SYMBOL),
            Some("use a short currency symbol")
        );
        form.set_value(CURRENCY_SYMBOL, "EUR");
        assert!(form.validate().error(CURRENCY_SYMBOL).is_none());
    }

    #[test]
    fn commit_trims_and_parses_the_join_flag() {
        let mut form = new_form();
        form.set_value(NAME, "  Trip  ");
        form.set_value(ADD_USER_ACCOUNT_ON_JOIN, "TRUE");
        let payload = commit(&form);
        assert_eq!(payload.name, "Trip");
        assert_eq!(payload.currency_symbol, "€");
        assert!(payload.add_user_account_on_join);
    }
}
