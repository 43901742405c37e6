//! Question provider module for the remote question service

mod client;
mod traits;

pub use client::QuestionServiceClient;
pub use traits::{FetchError, QuestionDescriptor, QuestionKind, QuestionProvider};

#[cfg(test)]
pub use traits::MockQuestionProvider;
