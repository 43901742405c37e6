//! Trait abstraction for the question provider to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input shape of a remotely provided question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Dropdown,
    Number,
    #[default]
    Text,
}

impl QuestionKind {
    /// Parse the wire representation; unrecognized kinds fall back to text
    pub fn parse(value: &str) -> Self {
        match value {
            "dropdown" => Self::Dropdown,
            "number" => Self::Number,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

/// One question as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub prompt: String,
    pub kind: QuestionKind,
    /// Populated only for dropdown questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Failure surfaced by a question fetch.
///
/// Recoverable: a failed fetch leaves the dynamic field set empty and never
/// blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("question service unavailable: {0}")]
    Unavailable(String),
    #[error("question service error: {0}")]
    Service(String),
    #[error("question service response invalid: {0}")]
    InvalidResponse(String),
}

/// Source of topic-keyed additional questions.
///
/// May be slow, may fail, and may complete out of order with earlier calls;
/// callers must tolerate late responses. One attempt per topic change — no
/// retry, no backoff.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch the additional questions for a survey topic
    async fn fetch_questions(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, FetchError>;
}
