//! Purchase creation form: description, value, billed-at date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Group, ShareMap, TransactionKind, TransactionPayload};

use super::{FieldSpec, FormSchema, FormState, Validator};

pub const DESCRIPTION: &str = "description";
pub const VALUE: &str = "value";
pub const BILLED_AT: &str = "billed_at";

/// Fresh form state; `today` seeds the billed-at default.
pub fn new_form(today: NaiveDate) -> FormState {
    let schema = Arc::new(FormSchema::new(
        "purchase",
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
        ],
    ));
    FormState::new(schema)
}

/// Maps validated raw values onto the creation payload. Currency follows
/// the group; a purchase carries no explicit share split.
pub fn commit(form: &FormState, group: &Group) -> TransactionPayload {
    TransactionPayload {
        kind: TransactionKind::Purchase,
        description: form.value(DESCRIPTION).trim().to_string(),
        value: form.value(VALUE).trim().parse().unwrap_or(0.0),
        billed_at: NaiveDate::parse_from_str(form.value(BILLED_AT).trim(), "%Y-%m-%d")
            .unwrap_or_default(),
        currency_symbol: group.currency_symbol.clone(),
        currency_conversion_rate: 1.0,
        creditor_shares: ShareMap::new(),
        debitor_shares: ShareMap::new(),
    }
}
