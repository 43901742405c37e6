//! Dynamic question state with a generation guard against stale fetches

use crate::provider::{FetchError, QuestionDescriptor};
use serde::{Deserialize, Serialize};

/// Monotonic counter distinguishing successive fetch attempts
pub type FetchGeneration = u64;

/// Loading status of the dynamic question set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionLoading {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// A field synthesized at runtime from a provider question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicField {
    /// Deterministic name, `question-<index>` within the current set
    pub name: String,
    pub descriptor: QuestionDescriptor,
}

impl DynamicField {
    fn from_descriptor(index: usize, descriptor: QuestionDescriptor) -> Self {
        Self {
            name: format!("question-{index}"),
            descriptor,
        }
    }
}

/// Owner of the live dynamic field set for the current topic selection.
///
/// Each topic change bumps the generation and tags the outgoing fetch with
/// it; an outcome is applied only if its generation is still current, so a
/// late response for an abandoned topic can never interleave with the live
/// set. At most one generation's fields exist at a time.
#[derive(Debug, Clone, Default)]
pub struct QuestionState {
    generation: FetchGeneration,
    status: QuestionLoading,
    fields: Vec<DynamicField>,
    error: Option<FetchError>,
}

impl QuestionState {
    /// Start a fetch for a newly selected topic.
    ///
    /// Discards the previous field set, marks the state loading, and
    /// returns the generation the caller must tag the fetch with.
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        self.status = QuestionLoading::Loading;
        self.fields.clear();
        self.error = None;
        self.generation
    }

    /// Drop the dynamic set without issuing a new fetch (topic cleared).
    ///
    /// Bumps the generation so any in-flight response is discarded on
    /// arrival.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = QuestionLoading::Idle;
        self.fields.clear();
        self.error = None;
    }

    /// Apply a fetch outcome tagged with `generation`.
    ///
    /// Returns false when the outcome is stale (the topic has changed since
    /// the fetch was issued) and was discarded without touching state.
    pub fn apply_outcome(
        &mut self,
        generation: FetchGeneration,
        outcome: Result<Vec<QuestionDescriptor>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale question fetch outcome"
            );
            return false;
        }

        match outcome {
            Ok(descriptors) => {
                self.fields = descriptors
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| DynamicField::from_descriptor(i, d))
                    .collect();
                self.status = QuestionLoading::Loaded;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "question fetch failed");
                self.fields.clear();
                self.status = QuestionLoading::Errored;
                self.error = Some(err);
            }
        }
        true
    }

    /// The live dynamic fields (empty while loading, idle, or errored)
    pub fn fields(&self) -> &[DynamicField] {
        &self.fields
    }

    pub fn status(&self) -> QuestionLoading {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QuestionLoading::Loading
    }

    /// The last fetch failure, if the current topic's fetch errored
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> FetchGeneration {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::QuestionKind;
    use pretty_assertions::assert_eq;

    fn descriptors(prompts: &[&str]) -> Vec<QuestionDescriptor> {
        prompts
            .iter()
            .map(|p| QuestionDescriptor {
                prompt: p.to_string(),
                kind: QuestionKind::Text,
                options: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_begin_fetch_increments_generation_and_loads() {
        let mut questions = QuestionState::default();
        let g1 = questions.begin_fetch();
        let g2 = questions.begin_fetch();
        assert!(g2 > g1);
        assert_eq!(questions.status(), QuestionLoading::Loading);
        assert!(questions.fields().is_empty());
    }

    #[test]
    fn test_successful_outcome_names_fields_deterministically() {
        let mut questions = QuestionState::default();
        let gen = questions.begin_fetch();
        assert!(questions.apply_outcome(gen, Ok(descriptors(&["a", "b", "c"]))));

        let names: Vec<_> = questions.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["question-0", "question-1", "question-2"]);
        assert_eq!(questions.status(), QuestionLoading::Loaded);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        // Topic change sequence T1 -> T2 where T1 resolves after T2
        let mut questions = QuestionState::default();
        let g1 = questions.begin_fetch();
        let g2 = questions.begin_fetch();

        assert!(questions.apply_outcome(g2, Ok(descriptors(&["t2-q0"]))));
        assert!(!questions.apply_outcome(g1, Ok(descriptors(&["t1-q0", "t1-q1"]))));

        assert_eq!(questions.fields().len(), 1);
        assert_eq!(questions.fields()[0].descriptor.prompt, "t2-q0");
        assert_eq!(questions.status(), QuestionLoading::Loaded);
    }

    #[test]
    fn test_stale_error_does_not_set_errored_status() {
        let mut questions = QuestionState::default();
        let g1 = questions.begin_fetch();
        let g2 = questions.begin_fetch();

        assert!(questions.apply_outcome(g2, Ok(descriptors(&["live"]))));
        assert!(!questions.apply_outcome(
            g1,
            Err(FetchError::Service("boom".to_string()))
        ));

        assert_eq!(questions.status(), QuestionLoading::Loaded);
        assert!(questions.error().is_none());
    }

    #[test]
    fn test_failure_clears_fields_and_records_error() {
        let mut questions = QuestionState::default();
        let gen = questions.begin_fetch();
        assert!(questions.apply_outcome(gen, Ok(descriptors(&["q"]))));

        let gen = questions.begin_fetch();
        assert!(questions.apply_outcome(gen, Err(FetchError::Unavailable("down".to_string()))));

        assert!(questions.fields().is_empty());
        assert_eq!(questions.status(), QuestionLoading::Errored);
        assert!(questions.error().is_some());
    }

    #[test]
    fn test_reset_discards_in_flight_fetch() {
        let mut questions = QuestionState::default();
        let gen = questions.begin_fetch();
        questions.reset();

        assert!(!questions.apply_outcome(gen, Ok(descriptors(&["late"]))));
        assert_eq!(questions.status(), QuestionLoading::Idle);
        assert!(questions.fields().is_empty());
    }

    #[test]
    fn test_begin_fetch_discards_previous_fields() {
        let mut questions = QuestionState::default();
        let gen = questions.begin_fetch();
        questions.apply_outcome(gen, Ok(descriptors(&["old"])));

        questions.begin_fetch();
        assert!(questions.fields().is_empty());
        assert!(questions.is_loading());
    }
}
