//! Headless form framework shared by the create screens.
//!
//! Every screen follows the same pattern: raw text values bound to a
//! declarative schema, a pure validator re-run on demand, touched
//! bookkeeping that gates error display, and a submitting flag owned by the
//! submission controller. Numeric and date fields stay raw text until
//! commit; a malformed value is a validation error, never a network-time
//! surprise.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate};

pub mod group;
pub mod invite;
pub mod purchase;
pub mod transfer;

type CustomRule = dyn Fn(&str) -> Result<(), String> + Send + Sync;
type SharedCustomRule = Arc<CustomRule>;

/// Built-in validation rules for a single field.
#[derive(Clone)]
pub enum Validator {
    None,
    /// Non-empty after trimming.
    Required(&'static str),
    /// Parses as a decimal number; empty input fails with the same message.
    Decimal(&'static str),
    /// Parses as a YYYY-MM-DD date.
    Date(&'static str),
    /// Empty, or parses as an RFC 3339 timestamp.
    OptionalDateTime(&'static str),
    Custom(SharedCustomRule),
}

impl Validator {
    fn check(&self, input: &str) -> Result<(), String> {
        match self {
            Validator::None => Ok(()),
            Validator::Required(message) => {
                if input.trim().is_empty() {
                    Err((*message).into())
                } else {
                    Ok(())
                }
            }
            Validator::Decimal(message) => {
                input
                    .trim()
                    .parse::<f64>()
                    .map(|_| ())
                    .map_err(|_| (*message).into())
            }
            Validator::Date(message) => NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| (*message).into()),
            Validator::OptionalDateTime(message) => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Ok(());
                }
                DateTime::parse_from_rfc3339(trimmed)
                    .map(|_| ())
                    .map_err(|_| (*message).into())
            }
            Validator::Custom(rule) => rule(input),
        }
    }
}

/// Declarative description of a single form field.
#[derive(Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub validator: Validator,
    pub default: String,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, validator: Validator) -> Self {
        Self {
            key,
            label,
            validator,
            default: String::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

/// Field order and rules for one screen's form.
#[derive(Clone)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Pure validation of raw values against this schema. One failing field
    /// never blocks the others from being checked.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in &self.fields {
            let raw = values.get(field.key).map(String::as_str).unwrap_or("");
            if let Err(message) = field.validator.check(raw) {
                report.errors.insert(field.key, message);
            }
        }
        report
    }
}

/// Outcome of validating a form; an empty report means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(key, message)| (*key, message.as_str()))
    }
}

/// Per-screen form state: raw values, touched flags, and a submitting flag.
///
/// Owned exclusively by one screen instance; never shared across screens.
pub struct FormState {
    schema: Arc<FormSchema>,
    values: BTreeMap<String, String>,
    touched: BTreeSet<&'static str>,
    submitting: bool,
}

impl FormState {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| (field.key.to_string(), field.default.clone()))
            .collect();
        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            submitting: false,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Updates a raw value. Keystrokes do not mark the field touched.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Marks the field touched; hosts call this when the field loses focus.
    pub fn blur(&mut self, field: &str) {
        if let Some(spec) = self.schema.field(field) {
            self.touched.insert(spec.key);
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn validate(&self) -> ValidationReport {
        self.schema.validate(&self.values)
    }

    /// Marks every field touched so all current errors become visible.
    pub fn touch_all(&mut self) {
        let keys: Vec<&'static str> = self.schema.fields.iter().map(|field| field.key).collect();
        self.touched.extend(keys);
    }

    /// A field's error is shown only once the user has interacted with it.
    pub fn should_show_error(&self, field: &str, report: &ValidationReport) -> bool {
        self.is_touched(field) && report.error(field).is_some()
    }

    /// The message to render for a field, honoring the touched policy.
    pub fn visible_error<'a>(&self, field: &str, report: &'a ValidationReport) -> Option<&'a str> {
        if self.is_touched(field) {
            report.error(field)
        } else {
            None
        }
    }

    /// Restores initial defaults and clears interaction bookkeeping.
    pub fn reset(&mut self) {
        self.values = self
            .schema
            .fields
            .iter()
            .map(|field| (field.key.to_string(), field.default.clone()))
            .collect();
        self.touched.clear();
        self.submitting = false;
    }
}
