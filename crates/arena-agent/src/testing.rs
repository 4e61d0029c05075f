//! Test doubles for agent tests

use crate::model::{CompletionModel, CompletionRequest};
use arena_core::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A scripted model that replays canned responses in order and records
/// every request it sees.
///
/// Once the script runs out it answers with a fixed placeholder, so tests
/// never hang on an exhausted queue.
pub struct MockModel {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn name(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(responses
            .pop_front()
            .unwrap_or_else(|| "Test response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_model_replays_in_order() {
        let model = MockModel::with_responses(["one", "two"]);
        assert_eq!(
            model.complete(CompletionRequest::new("a")).await.unwrap(),
            "one"
        );
        assert_eq!(
            model.complete(CompletionRequest::new("b")).await.unwrap(),
            "two"
        );
        assert_eq!(
            model.complete(CompletionRequest::new("c")).await.unwrap(),
            "Test response"
        );
    }

    #[tokio::test]
    async fn test_mock_model_records_requests() {
        let model = MockModel::with_responses(["one"]);
        model
            .complete(CompletionRequest::new("a").with_system("sys"))
            .await
            .unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "a");
        assert_eq!(requests[0].system.as_deref(), Some("sys"));
    }
}
