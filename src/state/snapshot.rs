//! Immutable submission snapshot taken when validation succeeds

use super::form_state::FormState;
use super::questions::DynamicField;
use crate::schema::{FieldValue, FormLevel, FormSchema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// One line of the flat summary listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// A dynamic question together with the answer captured at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub name: String,
    pub prompt: String,
    pub answer: String,
}

/// Immutable capture of a successfully validated form.
///
/// Consumed read-only by the summary renderer; a fresh edit on the source
/// form discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSnapshot {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub level: FormLevel,
    /// Full field state at the moment of submission
    pub state: FormState,
    /// Active static fields in schema order, values rendered for display
    pub summary: Vec<SummaryEntry>,
    /// Dynamic question answers keyed by their synthesized names
    pub questions: Vec<AnsweredQuestion>,
}

impl SubmissionSnapshot {
    /// Capture the current state; call only after validation succeeded
    pub fn capture(
        schema: &FormSchema,
        state: &FormState,
        active: &BTreeSet<String>,
        dynamic: &[DynamicField],
    ) -> Self {
        let summary = schema
            .fields
            .iter()
            .filter(|def| active.contains(def.name))
            .map(|def| SummaryEntry {
                name: def.name.to_string(),
                label: def.label.to_string(),
                value: render_value(state.value(def.name)),
            })
            .collect();

        let questions = dynamic
            .iter()
            .map(|field| AnsweredQuestion {
                name: field.name.clone(),
                prompt: field.descriptor.prompt.clone(),
                answer: state.text(&field.name).to_string(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            level: schema.level,
            state: state.clone(),
            summary,
            questions,
        }
    }

    /// Flat key/value listing for the summary renderer, static fields first
    /// and dynamic question answers after, keyed by prompt
    pub fn summary_lines(&self) -> Vec<(String, String)> {
        self.summary
            .iter()
            .map(|entry| (entry.label.clone(), entry.value.clone()))
            .chain(
                self.questions
                    .iter()
                    .map(|q| (q.prompt.clone(), q.answer.clone())),
            )
            .collect()
    }
}

fn render_value(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(s)) => s.clone(),
        Some(FieldValue::Selection(items)) => items.join(", "),
        None => String::new(),
    }
}
