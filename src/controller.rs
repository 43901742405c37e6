//! Form orchestration: edits, branch resolution, fetches, and submission

use crate::provider::{FetchError, QuestionDescriptor};
use crate::schema::{FormLevel, FormSchema};
use crate::state::{
    active_fields, FetchGeneration, FormState, QuestionState, SubmissionSnapshot,
};
use crate::validation::{validate, ValidationResult};
use std::collections::BTreeSet;

/// Lifecycle phase of a form instance.
///
/// Validation runs synchronously inside [`FormController::submit`], so the
/// machine only rests in these two phases; a fresh edit after a successful
/// submit returns to `Editing` and discards the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

/// A single state mutation; each event updates exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    SetText { field: String, value: String },
    ToggleSelection { field: String, option: String },
}

/// A question fetch the caller must run against the provider, tagged with
/// the generation to report back with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: FetchGeneration,
    pub topic: String,
}

/// Result of a submit attempt
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Accepted(SubmissionSnapshot),
    Rejected(ValidationResult),
}

/// Single-threaded owner of one form instance's state.
///
/// All mutation flows through [`apply_edit`](Self::apply_edit) and
/// [`apply_fetch_outcome`](Self::apply_fetch_outcome); the async fetch
/// itself is the caller's job (see `FormSession`), keeping this type a pure
/// state machine.
pub struct FormController {
    schema: FormSchema,
    state: FormState,
    questions: QuestionState,
    errors: ValidationResult,
    snapshot: Option<SubmissionSnapshot>,
    phase: Phase,
}

impl FormController {
    /// Create a controller for a fresh form instance of the given level
    pub fn new(level: FormLevel) -> Self {
        let schema = level.schema();
        let state = FormState::for_schema(&schema);
        Self {
            schema,
            state,
            questions: QuestionState::default(),
            errors: ValidationResult::default(),
            snapshot: None,
            phase: Phase::Editing,
        }
    }

    /// Apply one edit event.
    ///
    /// Returns a [`FetchRequest`] when the edit changed the topic field to
    /// a non-empty value; the caller runs the fetch and reports back via
    /// [`apply_fetch_outcome`](Self::apply_fetch_outcome).
    pub fn apply_edit(&mut self, event: EditEvent) -> Option<FetchRequest> {
        if self.phase == Phase::Submitted {
            self.phase = Phase::Editing;
            self.snapshot = None;
        }

        match event {
            EditEvent::SetText { field, value } => {
                let topic_changed = self
                    .schema
                    .topic_field
                    .is_some_and(|t| t == field && self.state.text(&field) != value);
                self.state.set_text(&field, value);
                if topic_changed {
                    self.on_topic_changed()
                } else {
                    None
                }
            }
            EditEvent::ToggleSelection { field, option } => {
                self.state.toggle_selection(&field, &option);
                None
            }
        }
    }

    fn on_topic_changed(&mut self) -> Option<FetchRequest> {
        // Answers to the previous topic's questions are no longer meaningful
        let stale_answers: Vec<String> = self
            .questions
            .fields()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        for name in stale_answers {
            self.state.remove(&name);
        }

        let topic = self
            .schema
            .topic_field
            .map(|t| self.state.text(t).trim().to_string())
            .unwrap_or_default();

        if topic.is_empty() {
            self.questions.reset();
            None
        } else {
            let generation = self.questions.begin_fetch();
            tracing::debug!(topic = %topic, generation, "issuing question fetch");
            Some(FetchRequest { generation, topic })
        }
    }

    /// Report a fetch outcome; stale generations are discarded silently.
    /// Returns whether the outcome was applied.
    pub fn apply_fetch_outcome(
        &mut self,
        generation: FetchGeneration,
        outcome: Result<Vec<QuestionDescriptor>, FetchError>,
    ) -> bool {
        self.questions.apply_outcome(generation, outcome)
    }

    /// Validate the active and dynamic fields and, on success, capture a
    /// submission snapshot.
    ///
    /// Never waits on an in-flight fetch: whatever dynamic fields are live
    /// right now (possibly none) are what get validated.
    pub fn submit(&mut self) -> SubmitOutcome {
        let active = active_fields(&self.schema, &self.state);
        let result = validate(&self.schema, &self.state, &active, self.questions.fields());

        if result.is_valid() {
            let snapshot =
                SubmissionSnapshot::capture(&self.schema, &self.state, &active, self.questions.fields());
            tracing::info!(id = %snapshot.id, level = ?self.schema.level, "submission accepted");
            self.errors = ValidationResult::default();
            self.snapshot = Some(snapshot.clone());
            self.phase = Phase::Submitted;
            SubmitOutcome::Accepted(snapshot)
        } else {
            tracing::debug!(failures = result.len(), "submission rejected");
            self.errors = result.clone();
            SubmitOutcome::Rejected(result)
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// The live snapshot, present only while in `Submitted`
    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Dynamic question state (loading status, live fields, fetch error)
    pub fn questions(&self) -> &QuestionState {
        &self.questions
    }

    /// Currently active static field names
    pub fn active_fields(&self) -> BTreeSet<String> {
        active_fields(&self.schema, &self.state)
    }
}
