//! The three intake form schemas

use super::field::{Activation, FieldDefinition, FieldKind};
use serde::{Deserialize, Serialize};

/// Skill checkboxes on the job application form
pub const SKILLS: &[&str] = &["JavaScript", "CSS", "Python"];

/// Survey topics driving the level-three branch
pub const SURVEY_TOPICS: &[&str] = &["Technology", "Health", "Education"];

/// Options for the technology branch language question
pub const PROGRAMMING_LANGUAGES: &[&str] = &["JavaScript", "Python", "Java", "C#"];

/// Options for the health branch exercise question
pub const EXERCISE_FREQUENCIES: &[&str] = &["Daily", "Weekly", "Monthly", "Rarely"];

/// Options for the health branch diet question
pub const DIET_PREFERENCES: &[&str] = &["Vegetarian", "Vegan", "Non-Vegetarian"];

/// Options for the education branch qualification question
pub const QUALIFICATIONS: &[&str] = &["High School", "Bachelor's", "Master's", "PhD"];

/// The three escalating intake forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormLevel {
    /// Event registration: static fields plus one guest-dependent field
    #[default]
    Registration,
    /// Job application: role-driven branches and a skills checkbox set
    JobApplication,
    /// Survey: topic-driven branches extended by remotely fetched questions
    Survey,
}

impl FormLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::JobApplication => "Job Application",
            Self::Survey => "Survey",
        }
    }

    /// Build the static schema for this level
    pub fn schema(&self) -> FormSchema {
        match self {
            Self::Registration => registration_schema(),
            Self::JobApplication => job_application_schema(),
            Self::Survey => survey_schema(),
        }
    }
}

/// The full static field set for one form level
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub level: FormLevel,
    pub fields: Vec<FieldDefinition>,
    /// Field whose value selects the remote question set, if any
    pub topic_field: Option<&'static str>,
}

impl FormSchema {
    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all statically known fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

fn registration_schema() -> FormSchema {
    FormSchema {
        level: FormLevel::Registration,
        fields: vec![
            FieldDefinition::new("name", "Name", FieldKind::Text),
            FieldDefinition::new("email", "Email", FieldKind::Email),
            FieldDefinition::new("age", "Age", FieldKind::Number { positive: true }),
            FieldDefinition::new(
                "attending_with_guest",
                "Are you attending with a guest?",
                FieldKind::SingleSelect {
                    options: &["No", "Yes"],
                },
            )
            .with_default("No"),
            FieldDefinition::branch(
                "guest_name",
                "Guest Name",
                FieldKind::Text,
                Activation::Equals {
                    field: "attending_with_guest",
                    value: "Yes",
                },
            ),
        ],
        topic_field: None,
    }
}

fn job_application_schema() -> FormSchema {
    FormSchema {
        level: FormLevel::JobApplication,
        fields: vec![
            FieldDefinition::new("full_name", "Full Name", FieldKind::Text),
            FieldDefinition::new("email", "Email", FieldKind::Email),
            FieldDefinition::new(
                "phone_number",
                "Phone Number",
                FieldKind::Number { positive: false },
            ),
            FieldDefinition::new(
                "position",
                "Applying for Position",
                FieldKind::SingleSelect {
                    options: &["Developer", "Designer", "Manager"],
                },
            )
            .with_default("Developer"),
            FieldDefinition::branch(
                "relevant_experience",
                "Relevant Experience (years)",
                FieldKind::Number { positive: true },
                Activation::OneOf {
                    field: "position",
                    values: &["Developer", "Designer"],
                },
            ),
            FieldDefinition::branch(
                "portfolio_url",
                "Portfolio URL",
                FieldKind::Url,
                Activation::Equals {
                    field: "position",
                    value: "Designer",
                },
            ),
            FieldDefinition::branch(
                "management_experience",
                "Management Experience",
                FieldKind::Text,
                Activation::Equals {
                    field: "position",
                    value: "Manager",
                },
            ),
            FieldDefinition::new(
                "additional_skills",
                "Additional Skills",
                FieldKind::MultiSelect {
                    options: SKILLS,
                    min: 1,
                },
            ),
            FieldDefinition::new(
                "interview_time",
                "Preferred Interview Time",
                FieldKind::DateTime,
            ),
        ],
        topic_field: None,
    }
}

fn survey_schema() -> FormSchema {
    FormSchema {
        level: FormLevel::Survey,
        fields: vec![
            FieldDefinition::new("full_name", "Full Name", FieldKind::Text),
            FieldDefinition::new("email", "Email", FieldKind::Email),
            FieldDefinition::new(
                "survey_topic",
                "Survey Topic",
                FieldKind::SingleSelect {
                    options: SURVEY_TOPICS,
                },
            ),
            FieldDefinition::branch(
                "favorite_language",
                "Favorite Programming Language",
                FieldKind::SingleSelect {
                    options: PROGRAMMING_LANGUAGES,
                },
                Activation::Equals {
                    field: "survey_topic",
                    value: "Technology",
                },
            ),
            FieldDefinition::branch(
                "years_of_experience",
                "Years of Experience",
                FieldKind::Number { positive: true },
                Activation::Equals {
                    field: "survey_topic",
                    value: "Technology",
                },
            ),
            FieldDefinition::branch(
                "exercise_frequency",
                "Exercise Frequency",
                FieldKind::SingleSelect {
                    options: EXERCISE_FREQUENCIES,
                },
                Activation::Equals {
                    field: "survey_topic",
                    value: "Health",
                },
            ),
            FieldDefinition::branch(
                "diet_preference",
                "Diet Preference",
                FieldKind::SingleSelect {
                    options: DIET_PREFERENCES,
                },
                Activation::Equals {
                    field: "survey_topic",
                    value: "Health",
                },
            ),
            FieldDefinition::branch(
                "highest_qualification",
                "Highest Qualification",
                FieldKind::SingleSelect {
                    options: QUALIFICATIONS,
                },
                Activation::Equals {
                    field: "survey_topic",
                    value: "Education",
                },
            ),
            FieldDefinition::branch(
                "field_of_study",
                "Field of Study",
                FieldKind::Text,
                Activation::Equals {
                    field: "survey_topic",
                    value: "Education",
                },
            ),
            FieldDefinition::new("feedback", "Feedback", FieldKind::LongText { min_len: 50 }),
        ],
        topic_field: Some("survey_topic"),
    }
}
