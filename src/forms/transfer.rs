//! Transfer creation form: description, value, billed-at date, and the
//! creditor/debitor account selection.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{EntityId, Group, ShareMap, TransactionKind, TransactionPayload};

use super::{FieldSpec, FormSchema, FormState, Validator};

pub const DESCRIPTION: &str = "description";
pub const VALUE: &str = "value";
pub const BILLED_AT: &str = "billed_at";
pub const CREDITOR: &str = "creditor";
pub const DEBITOR: &str = "debitor";

/// Fresh form state; `today` seeds the billed-at default. Account
/// selections are stored as the chosen account's id in raw text, like any
/// other field.
pub fn new_form(today: NaiveDate) -> FormState {
    let schema = Arc::new(FormSchema::new(
        "transfer",
        vec![
            FieldSpec::new(
                DESCRIPTION,
                "Description",
                Validator::Required("description is required"),
            ),
            FieldSpec::new(VALUE, "Value", Validator::Decimal("value is required"))
                .with_default("0.0"),
            FieldSpec::new(
                BILLED_AT,
                "Billed at",
                Validator::Date("use YYYY-MM-DD format"),
            )
            .with_default(today.to_string()),
            FieldSpec::new(CREDITOR, "From", Validator::Required("from is required")),
            FieldSpec::new(DEBITOR, "To", Validator::Required("to is required")),
        ],
    ));
    FormState::new(schema)
}

/// Maps validated raw values onto the creation payload. Each side of the
/// transfer becomes a single-entry share map with weight 1.0.
pub fn commit(form: &FormState, group: &Group) -> TransactionPayload {
    TransactionPayload {
        kind: TransactionKind::Transfer,
        description: form.value(DESCRIPTION).trim().to_string(),
        value: form.value(VALUE).trim().parse().unwrap_or(0.0),
        billed_at: NaiveDate::parse_from_str(form.value(BILLED_AT).trim(), "%Y-%m-%d")
            .unwrap_or_default(),
        currency_symbol: group.currency_symbol.clone(),
        currency_conversion_rate: 1.0,
        creditor_shares: single_share(form.value(CREDITOR)),
        debitor_shares: single_share(form.value(DEBITOR)),
    }
}

fn single_share(raw: &str) -> ShareMap {
    let mut shares = ShareMap::new();
    if let Ok(account_id) = raw.trim().parse::<EntityId>() {
        shares.insert(account_id, 1.0);
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        Group {
            id: 7,
            name: "Flat".into(),
            description: String::new(),
            currency_symbol: "€".into(),
            terms: String::new(),
            add_user_account_on_join: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn missing_accounts_fail_with_screen_messages() {
        let mut form = new_form(today());
        form.set_value(DESCRIPTION, "Settle up");
        form.set_value(VALUE, "20");
        let report = form.validate();
        assert_eq!(report.error(CREDITOR), Some("from is required"));
        assert_eq!(report.error(DEBITOR), Some("to is required"));
    }

    #[test]
    fn commit_builds_single_entry_share_maps() {
        let mut form = new_form(today());
        form.set_value(DESCRIPTION, "Settle up");
        form.set_value(VALUE, "20");
        form.set_value(CREDITOR, "11");
        form.set_value(DEBITOR, "12");
        let payload = commit(&form, &group());
        assert_eq!(payload.kind, TransactionKind::Transfer);
        assert_eq!(payload.creditor_shares.get(&11), Some(&1.0));
        assert_eq!(payload.debitor_shares.get(&12), Some(&1.0));
    }
}
