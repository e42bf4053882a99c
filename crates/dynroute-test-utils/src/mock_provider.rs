// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock model endpoint for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with scripted replies and
//! records every request it receives, so tests can assert how often and
//! with what prompt an endpoint was called.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use dynroute_core::{DynrouteError, ProviderAdapter, ProviderRequest, ProviderResponse};

/// One scripted endpoint behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Succeed with this text.
    Text(String),
    /// Succeed with an empty string.
    Empty,
    /// Fail with a provider error carrying this message.
    Fail(String),
    /// Fail with a timeout for the request's deadline.
    Timeout,
}

/// A mock model endpoint that replays scripted replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, the
/// fallback reply is used for every further call.
pub struct MockProvider {
    name: String,
    replies: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    /// A provider that answers "mock response" to everything.
    pub fn new(name: impl Into<String>) -> Self {
        Self::answering(name, "mock response")
    }

    /// A provider that answers `text` to everything.
    pub fn answering(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::build(name, Vec::new(), MockReply::Text(text.into()))
    }

    /// A provider whose every call fails with `message`.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::build(name, Vec::new(), MockReply::Fail(message.into()))
    }

    /// A provider whose every call succeeds with empty text.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::build(name, Vec::new(), MockReply::Empty)
    }

    /// A provider pre-loaded with `replies`, then "mock response".
    pub fn with_replies(name: impl Into<String>, replies: Vec<MockReply>) -> Self {
        Self::build(name, replies, MockReply::Text("mock response".into()))
    }

    /// A provider pre-loaded with text responses, then "mock response".
    pub fn with_responses(name: impl Into<String>, responses: Vec<&str>) -> Self {
        Self::with_replies(
            name,
            responses
                .into_iter()
                .map(|r| MockReply::Text(r.to_string()))
                .collect(),
        )
    }

    fn build(name: impl Into<String>, replies: Vec<MockReply>, fallback: MockReply) -> Self {
        Self {
            name: name.into(),
            replies: Mutex::new(VecDeque::from(replies)),
            fallback,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Number of `complete` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received so far, in order.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().await.clone()
    }

    async fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, DynrouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request.clone());

        let content = match self.next_reply().await {
            MockReply::Text(text) => text,
            MockReply::Empty => String::new(),
            MockReply::Fail(message) => return Err(DynrouteError::provider(message)),
            MockReply::Timeout => {
                return Err(DynrouteError::Timeout {
                    duration: request.timeout,
                });
            }
        };

        Ok(ProviderResponse {
            content,
            model: request.model,
            finish_reason: Some("stop".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use dynroute_core::ProviderMessage;

    fn request() -> ProviderRequest {
        ProviderRequest {
            model: "test-model".to_string(),
            messages: vec![ProviderMessage::user("hello")],
            temperature: 0.5,
            max_tokens: 100,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = MockProvider::new("mock");
        let resp = provider.complete(request()).await.unwrap();
        assert_eq!(resp.content, "mock response");
        assert_eq!(resp.model, "test-model");
    }

    #[tokio::test]
    async fn queued_replies_returned_in_order() {
        let provider = MockProvider::with_replies(
            "mock",
            vec![
                MockReply::Text("first".into()),
                MockReply::Empty,
                MockReply::Fail("boom".into()),
                MockReply::Timeout,
            ],
        );

        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(request()).await.unwrap().content, "");
        let err = provider.complete(request()).await.unwrap_err();
        assert_eq!(err.to_string(), "provider error: boom");
        let err = provider.complete(request()).await.unwrap_err();
        assert!(matches!(err, DynrouteError::Timeout { duration } if duration == Duration::from_secs(5)));
        assert_eq!(
            provider.complete(request()).await.unwrap().content,
            "mock response"
        );
    }

    #[tokio::test]
    async fn counts_and_records_calls() {
        let provider = MockProvider::failing("mock", "down");
        assert_eq!(provider.call_count(), 0);

        let _ = provider.complete(request()).await;
        let _ = provider.complete(request()).await;

        assert_eq!(provider.call_count(), 2);
        let requests = provider.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].messages[0].content, "hello");
    }

    #[tokio::test]
    async fn add_reply_after_construction() {
        let provider = MockProvider::empty("mock");
        provider.add_reply(MockReply::Text("dynamic".into())).await;
        assert_eq!(provider.complete(request()).await.unwrap().content, "dynamic");
        assert_eq!(provider.complete(request()).await.unwrap().content, "");
    }

    #[tokio::test]
    async fn with_responses_wraps_text() {
        let provider = MockProvider::with_responses("mock", vec!["a", "b"]);
        assert_eq!(provider.name(), "mock");
        assert_eq!(provider.complete(request()).await.unwrap().content, "a");
        assert_eq!(provider.complete(request()).await.unwrap().content, "b");
    }
}
