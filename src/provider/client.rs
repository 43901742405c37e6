//! gRPC client for the remote question service
//!
//! This module provides the concrete question provider backed by the
//! question service, using the generated proto types.

use super::traits::{FetchError, QuestionDescriptor, QuestionKind, QuestionProvider};
use crate::config::EngineConfig;
use async_trait::async_trait;

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("questions");
}

use proto::question_service_client::QuestionServiceClient as GrpcQuestionClient;

/// Default question service address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Questions requested per topic unless configured otherwise
const DEFAULT_QUESTION_LIMIT: u32 = 5;

/// Question provider backed by the question service
pub struct QuestionServiceClient {
    /// The service address
    address: String,
    /// Maximum questions requested per topic
    limit: u32,
}

impl QuestionServiceClient {
    /// Create a client from configuration, with env-var override
    pub fn new() -> Self {
        let config = EngineConfig::load().unwrap_or_default();
        let address = std::env::var("INTAKE_QUESTION_SERVICE_ADDRESS")
            .ok()
            .or(config.question_service_address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let limit = config.question_limit.unwrap_or(DEFAULT_QUESTION_LIMIT);

        Self { address, limit }
    }

    /// Create a client for a specific address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            limit: DEFAULT_QUESTION_LIMIT,
        }
    }
}

impl Default for QuestionServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionProvider for QuestionServiceClient {
    async fn fetch_questions(&self, topic: &str) -> Result<Vec<QuestionDescriptor>, FetchError> {
        let mut client = GrpcQuestionClient::connect(self.address.clone())
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        let request = tonic::Request::new(proto::GetQuestionsRequest {
            topic: topic.to_string(),
            limit: self.limit,
        });

        let response = client
            .get_questions(request)
            .await
            .map_err(|status| FetchError::Service(status.message().to_string()))?;

        let questions = response
            .into_inner()
            .questions
            .into_iter()
            .map(|q| {
                if q.prompt.is_empty() {
                    return Err(FetchError::InvalidResponse(
                        "question with empty prompt".to_string(),
                    ));
                }
                Ok(QuestionDescriptor {
                    prompt: q.prompt,
                    kind: QuestionKind::parse(&q.kind),
                    options: q.options,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }
}
