//! Validation rules applied to active fields
//!
//! Rules are evaluated per field from its kind alone; no rule reads another
//! field's error state, so results are order-insensitive. Only fields in
//! the active set (plus live dynamic fields) are evaluated — an inactive
//! field never produces an error even when populated with invalid data.
//!
//! Rule table by kind:
//! - `Text`: non-empty after trimming
//! - `Email`: non-empty and shaped `local@domain.tld`
//! - `Number { positive: true }`: parses as a number, greater than zero
//! - `Number { positive: false }`: parses as a number, any sign
//! - `Url`: non-empty
//! - `SingleSelect`: non-empty (option membership is not checked)
//! - `MultiSelect { min }`: selection cardinality >= min
//! - `LongText { min_len }`: trimmed length >= min_len
//! - `DateTime`: non-empty. Whether the value must not lie in the past is
//!   an unresolved product decision (timezone, boundary semantics), so no
//!   date comparison is performed.
//!
//! Every dynamic question field is validated as required-non-empty
//! regardless of its descriptor kind.

use crate::schema::{FieldDefinition, FieldKind, FormSchema};
use crate::state::{DynamicField, FormState};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const REQUIRED: &str = "required";

/// Field name → failure reason; empty means the form is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure reason for a field, if it failed
    pub fn reason(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate failures in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }

    fn insert(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.errors.insert(field.into(), reason.into());
    }
}

/// Validate the active static fields and the live dynamic fields
pub fn validate(
    schema: &FormSchema,
    state: &FormState,
    active: &BTreeSet<String>,
    dynamic: &[DynamicField],
) -> ValidationResult {
    let mut result = ValidationResult::default();

    for def in &schema.fields {
        if !active.contains(def.name) {
            continue;
        }
        if let Some(reason) = check_field(def, state) {
            result.insert(def.name, reason);
        }
    }

    for field in dynamic {
        if state.text(&field.name).trim().is_empty() {
            result.insert(field.name.clone(), REQUIRED);
        }
    }

    result
}

fn check_field(def: &FieldDefinition, state: &FormState) -> Option<String> {
    match &def.kind {
        FieldKind::Text
        | FieldKind::Url
        | FieldKind::DateTime
        | FieldKind::SingleSelect { .. } => {
            let value = state.text(def.name).trim();
            value.is_empty().then(|| REQUIRED.to_string())
        }
        FieldKind::Email => {
            let value = state.text(def.name).trim();
            if value.is_empty() {
                Some(REQUIRED.to_string())
            } else if !is_valid_email(value) {
                Some("must be a valid email address".to_string())
            } else {
                None
            }
        }
        FieldKind::Number { positive } => {
            let value = state.text(def.name).trim();
            if value.is_empty() {
                return Some(REQUIRED.to_string());
            }
            match value.parse::<f64>() {
                Err(_) => Some("must be a number".to_string()),
                Ok(n) if *positive && n <= 0.0 => {
                    Some("must be a number greater than 0".to_string())
                }
                Ok(_) => None,
            }
        }
        FieldKind::MultiSelect { min, .. } => {
            let count = state.selection(def.name).len();
            if count < *min {
                if *min == 1 {
                    Some("at least one selection required".to_string())
                } else {
                    Some(format!("at least {min} selections required"))
                }
            } else {
                None
            }
        }
        FieldKind::LongText { min_len } => {
            let value = state.text(def.name).trim();
            if value.is_empty() {
                Some(REQUIRED.to_string())
            } else if value.chars().count() < *min_len {
                Some(format!("must be at least {min_len} characters"))
            } else {
                None
            }
        }
    }
}

/// Structural `local@domain.tld` check, deliberately permissive
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
