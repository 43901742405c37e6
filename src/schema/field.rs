//! Field definitions and value objects

use serde::{Deserialize, Serialize};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Selection(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Get the text value (returns empty string for selections)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selection(_) => "",
        }
    }

    /// Get the selection members (returns empty slice for text values)
    pub fn as_selection(&self) -> &[String] {
        match self {
            FieldValue::Selection(items) => items,
            FieldValue::Text(_) => &[],
        }
    }

    /// Whether the value is empty: blank after trimming, or no selections
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Selection(items) => items.is_empty(),
        }
    }
}

/// Validation-relevant shape of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, required non-empty
    Text,
    /// Required, must look like `local@domain.tld`
    Email,
    /// Required, must parse as a number; `positive` additionally requires > 0
    Number { positive: bool },
    /// Required non-empty URL (no structural check beyond presence)
    Url,
    /// Required non-empty date/time string
    DateTime,
    /// One choice from a fixed option list
    SingleSelect { options: &'static [&'static str] },
    /// Checkbox-style set with a minimum-selection rule
    MultiSelect {
        options: &'static [&'static str],
        min: usize,
    },
    /// Free text with a length floor (after trimming)
    LongText { min_len: usize },
}

/// Rule deciding whether a field is active for the current state.
///
/// Kept as data rather than closures so the branch resolver stays a pure,
/// directly testable function of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Always,
    /// Active when the named field holds exactly this text value
    Equals {
        field: &'static str,
        value: &'static str,
    },
    /// Active when the named field holds any of these text values
    OneOf {
        field: &'static str,
        values: &'static [&'static str],
    },
}

/// Static description of a single form field
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub activation: Activation,
    pub default: Option<&'static str>,
}

impl FieldDefinition {
    /// Create a field that is always active
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            activation: Activation::Always,
            default: None,
        }
    }

    /// Create a branch field, active only when `activation` holds
    pub fn branch(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        activation: Activation,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            activation,
            default: None,
        }
    }

    /// Set the value the field is seeded with at form entry
    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether the field holds a selection set rather than a scalar
    pub fn is_selection(&self) -> bool {
        matches!(self.kind, FieldKind::MultiSelect { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty_text() {
            let value = FieldValue::default();
            assert_eq!(value.as_text(), "");
            assert!(value.is_empty());
        }

        #[test]
        fn test_as_text_on_selection_is_empty() {
            let value = FieldValue::Selection(vec!["CSS".to_string()]);
            assert_eq!(value.as_text(), "");
        }

        #[test]
        fn test_as_selection_on_text_is_empty() {
            let value = FieldValue::text("hello");
            assert!(value.as_selection().is_empty());
        }

        #[test]
        fn test_whitespace_only_text_is_empty() {
            let value = FieldValue::text("   ");
            assert!(value.is_empty());
        }

        #[test]
        fn test_non_empty_selection_is_not_empty() {
            let value = FieldValue::Selection(vec!["Python".to_string()]);
            assert!(!value.is_empty());
        }

        #[test]
        fn test_serde_round_trip() {
            let value = FieldValue::Selection(vec!["a".to_string(), "b".to_string()]);
            let json = serde_json::to_string(&value).unwrap();
            let parsed: FieldValue = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, value);
        }
    }

    mod field_definition {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_always_active() {
            let def = FieldDefinition::new("email", "Email", FieldKind::Email);
            assert_eq!(def.activation, Activation::Always);
            assert!(def.default.is_none());
        }

        #[test]
        fn test_with_default() {
            let def = FieldDefinition::new(
                "position",
                "Applying for Position",
                FieldKind::SingleSelect {
                    options: &["Developer", "Designer", "Manager"],
                },
            )
            .with_default("Developer");
            assert_eq!(def.default, Some("Developer"));
        }

        #[test]
        fn test_is_selection() {
            let multi = FieldDefinition::new(
                "skills",
                "Skills",
                FieldKind::MultiSelect {
                    options: &["CSS"],
                    min: 1,
                },
            );
            let text = FieldDefinition::new("name", "Name", FieldKind::Text);
            assert!(multi.is_selection());
            assert!(!text.is_selection());
        }
    }
}
