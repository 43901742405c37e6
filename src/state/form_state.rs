//! Mutable form state for one level instance

use crate::schema::{FieldValue, FormSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → value mapping for one form instance.
///
/// Created at level entry, mutated one field per edit event, discarded on
/// level exit. Dynamically synthesized question fields share this map with
/// the static schema fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Create state for a schema, seeding defaults and selection shapes
    pub fn for_schema(schema: &FormSchema) -> Self {
        let mut values = BTreeMap::new();
        for def in &schema.fields {
            let value = if def.is_selection() {
                FieldValue::Selection(Vec::new())
            } else {
                FieldValue::Text(def.default.unwrap_or("").to_string())
            };
            values.insert(def.name.to_string(), value);
        }
        Self { values }
    }

    /// Get a field's value, if present
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Get a field's text (empty string when absent or a selection)
    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Get a field's selection members (empty when absent or scalar)
    pub fn selection(&self, name: &str) -> &[String] {
        self.values
            .get(name)
            .map(FieldValue::as_selection)
            .unwrap_or(&[])
    }

    /// Set a field's text value, inserting the field if unknown
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    /// Toggle membership of one option in a selection field
    pub fn toggle_selection(&mut self, name: &str, option: &str) {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Selection(Vec::new()));

        // A scalar field toggled as a set becomes a set
        if !matches!(entry, FieldValue::Selection(_)) {
            *entry = FieldValue::Selection(Vec::new());
        }
        if let FieldValue::Selection(items) = entry {
            if let Some(pos) = items.iter().position(|s| s == option) {
                items.remove(pos);
            } else {
                items.push(option.to_string());
            }
        }
    }

    /// Remove a field's value entirely (used when dynamic fields are replaced)
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Iterate all field values in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}
