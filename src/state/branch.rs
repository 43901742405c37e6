//! Branch resolution: which fields are active for the current state

use super::form_state::FormState;
use crate::schema::{Activation, FieldDefinition, FormSchema};
use std::collections::BTreeSet;

/// Compute the set of active field names for the current state.
///
/// Pure function of the schema and state: no I/O, no counters. Inactive
/// fields are skipped by validation entirely, even when populated.
pub fn active_fields(schema: &FormSchema, state: &FormState) -> BTreeSet<String> {
    schema
        .fields
        .iter()
        .filter(|def| is_active(def, state))
        .map(|def| def.name.to_string())
        .collect()
}

/// Evaluate a single field's activation rule against the state
pub fn is_active(def: &FieldDefinition, state: &FormState) -> bool {
    match &def.activation {
        Activation::Always => true,
        Activation::Equals { field, value } => state.text(field) == *value,
        Activation::OneOf { field, values } => values.iter().any(|v| *v == state.text(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormLevel;
    use pretty_assertions::assert_eq;

    fn job_state(position: &str) -> (FormSchema, FormState) {
        let schema = FormLevel::JobApplication.schema();
        let mut state = FormState::for_schema(&schema);
        state.set_text("position", position);
        (schema, state)
    }

    fn survey_state(topic: &str) -> (FormSchema, FormState) {
        let schema = FormLevel::Survey.schema();
        let mut state = FormState::for_schema(&schema);
        state.set_text("survey_topic", topic);
        (schema, state)
    }

    mod job_application {
        use super::*;

        #[test]
        fn test_developer_activates_experience_only() {
            let (schema, state) = job_state("Developer");
            let active = active_fields(&schema, &state);
            assert!(active.contains("relevant_experience"));
            assert!(!active.contains("portfolio_url"));
            assert!(!active.contains("management_experience"));
        }

        #[test]
        fn test_designer_activates_experience_and_portfolio() {
            let (schema, state) = job_state("Designer");
            let active = active_fields(&schema, &state);
            assert!(active.contains("relevant_experience"));
            assert!(active.contains("portfolio_url"));
            assert!(!active.contains("management_experience"));
        }

        #[test]
        fn test_manager_activates_management_experience_only() {
            let (schema, state) = job_state("Manager");
            let active = active_fields(&schema, &state);
            assert!(!active.contains("relevant_experience"));
            assert!(!active.contains("portfolio_url"));
            assert!(active.contains("management_experience"));
        }

        #[test]
        fn test_experience_inactive_for_unrecognized_position() {
            // Populated experience data must not resurrect the branch
            let (schema, mut state) = job_state("Astronaut");
            state.set_text("relevant_experience", "10");
            let active = active_fields(&schema, &state);
            assert!(!active.contains("relevant_experience"));
        }

        #[test]
        fn test_static_fields_always_active() {
            let (schema, state) = job_state("Manager");
            let active = active_fields(&schema, &state);
            for name in ["full_name", "email", "phone_number", "additional_skills"] {
                assert!(active.contains(name), "{name} should be active");
            }
        }
    }

    mod survey {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_technology_branch() {
            let (schema, state) = survey_state("Technology");
            let active = active_fields(&schema, &state);
            assert!(active.contains("favorite_language"));
            assert!(active.contains("years_of_experience"));
            assert!(!active.contains("exercise_frequency"));
            assert!(!active.contains("highest_qualification"));
        }

        #[test]
        fn test_health_branch() {
            let (schema, state) = survey_state("Health");
            let active = active_fields(&schema, &state);
            assert!(active.contains("exercise_frequency"));
            assert!(active.contains("diet_preference"));
            assert!(!active.contains("favorite_language"));
        }

        #[test]
        fn test_education_branch() {
            let (schema, state) = survey_state("Education");
            let active = active_fields(&schema, &state);
            assert!(active.contains("highest_qualification"));
            assert!(active.contains("field_of_study"));
            assert!(!active.contains("diet_preference"));
        }

        #[test]
        fn test_no_topic_activates_no_branch_fields() {
            let (schema, state) = survey_state("");
            let active = active_fields(&schema, &state);
            for name in [
                "favorite_language",
                "years_of_experience",
                "exercise_frequency",
                "diet_preference",
                "highest_qualification",
                "field_of_study",
            ] {
                assert!(!active.contains(name), "{name} should be inactive");
            }
            assert!(active.contains("feedback"));
        }

        #[test]
        fn test_same_state_yields_same_set() {
            let (schema, state) = survey_state("Health");
            assert_eq!(
                active_fields(&schema, &state),
                active_fields(&schema, &state)
            );
        }
    }

    mod registration {
        use super::*;

        #[test]
        fn test_guest_name_follows_attendance() {
            let schema = FormLevel::Registration.schema();
            let mut state = FormState::for_schema(&schema);
            assert!(!active_fields(&schema, &state).contains("guest_name"));

            state.set_text("attending_with_guest", "Yes");
            assert!(active_fields(&schema, &state).contains("guest_name"));
        }
    }
}
