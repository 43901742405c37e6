//! intake — staged form state, branching, and validation engine
//!
//! Collects structured data through three escalating form levels and
//! renders a summary of what was captured. Level one is static fields with
//! simple rules; level two adds role-driven branches and a checkbox set
//! with a minimum-selection rule; level three adds topic-driven branches
//! plus a runtime extension of the field set, fetched asynchronously from
//! a question service and merged into validation with a generation guard
//! against stale responses.
//!
//! The crate is presentation-free: a view layer drives [`FormSession`]
//! (or [`FormController`] directly) with edit events and renders the
//! resulting state, errors, and submission snapshots.

pub mod config;
pub mod controller;
pub mod provider;
pub mod schema;
pub mod session;
pub mod state;
pub mod validation;

pub use config::EngineConfig;
pub use controller::{EditEvent, FetchRequest, FormController, Phase, SubmitOutcome};
pub use provider::{
    FetchError, QuestionDescriptor, QuestionKind, QuestionProvider, QuestionServiceClient,
};
pub use schema::{FieldDefinition, FieldKind, FieldValue, FormLevel, FormSchema};
pub use session::FormSession;
pub use state::{
    active_fields, DynamicField, FetchGeneration, FormState, QuestionLoading, QuestionState,
    SubmissionSnapshot,
};
pub use validation::{validate, ValidationResult};
