// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-backed query complexity classification.
//!
//! One few-shot call to the cheapest tier's endpoint, whatever category the
//! query turns out to be. The reply must be exactly `Simple`, `Medium`, or
//! `Advanced` after trimming; anything else, or a failed call, yields
//! [`Category::Medium`]. Single attempt, no retry.

use dynroute_core::Category;
use tracing::{debug, warn};

use crate::invoke::TierBinding;
use crate::prompts;

/// Classifies queries by asking a model for a one-word label.
#[derive(Clone)]
pub struct QueryClassifier {
    binding: TierBinding,
}

impl QueryClassifier {
    /// Create a classifier that calls `binding`'s endpoint with its profile.
    pub fn new(binding: TierBinding) -> Self {
        Self { binding }
    }

    /// Classify a query. Infallible: every failure maps to the default category.
    pub async fn classify(&self, query: &str) -> Category {
        let request = self
            .binding
            .request(prompts::classification_messages(query));

        let response = match self.binding.endpoint.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "classification call failed, defaulting to {}", Category::default());
                return Category::default();
            }
        };

        let label = response.content.trim();
        match Category::from_label(label) {
            Some(category) => {
                debug!(category = %category, "query classified");
                category
            }
            None => {
                warn!(
                    label,
                    "unrecognized classification label, defaulting to {}",
                    Category::default()
                );
                Category::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::invoke::TierProfile;
    use dynroute_test_utils::{MockProvider, MockReply};

    fn classifier(provider: Arc<MockProvider>) -> QueryClassifier {
        QueryClassifier::new(TierBinding::new(
            provider,
            TierProfile {
                model: "small".to_string(),
                temperature: 0.2,
                max_tokens: 100,
                timeout: Duration::from_secs(60),
            },
        ))
    }

    async fn classify_reply(reply: MockReply) -> Category {
        let provider = Arc::new(MockProvider::with_replies("classifier", vec![reply]));
        classifier(provider).classify("some query").await
    }

    #[tokio::test]
    async fn accepts_exact_labels() {
        assert_eq!(classify_reply(MockReply::Text("Simple".into())).await, Category::Simple);
        assert_eq!(classify_reply(MockReply::Text("Medium".into())).await, Category::Medium);
        assert_eq!(
            classify_reply(MockReply::Text("Advanced".into())).await,
            Category::Advanced
        );
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        assert_eq!(
            classify_reply(MockReply::Text("  Advanced\n".into())).await,
            Category::Advanced
        );
    }

    #[tokio::test]
    async fn invalid_labels_default_to_medium() {
        for reply in ["advanced", "Unsure", "", "Simple.", "'Simple'", "Simple or Medium"] {
            assert_eq!(
                classify_reply(MockReply::Text(reply.into())).await,
                Category::Medium,
                "reply {reply:?} should default"
            );
        }
        assert_eq!(classify_reply(MockReply::Empty).await, Category::Medium);
    }

    #[tokio::test]
    async fn endpoint_errors_default_to_medium() {
        assert_eq!(
            classify_reply(MockReply::Fail("connection refused".into())).await,
            Category::Medium
        );
        assert_eq!(classify_reply(MockReply::Timeout).await, Category::Medium);
    }

    #[tokio::test]
    async fn sends_one_few_shot_request() {
        let provider = Arc::new(MockProvider::answering("classifier", "Simple"));
        let classifier = classifier(provider.clone());

        classifier.classify("2+2").await;

        assert_eq!(provider.call_count(), 1);
        let requests = provider.requests().await;
        assert_eq!(requests[0].model, "small");
        assert_eq!(requests[0].messages.len(), 8);
        assert_eq!(
            requests[0].messages.last().map(|m| m.content.as_str()),
            Some("Query: '2+2'")
        );
    }

    #[tokio::test]
    async fn failed_call_is_not_retried() {
        let provider = Arc::new(MockProvider::failing("classifier", "503"));
        let classifier = classifier(provider.clone());

        classifier.classify("q").await;
        assert_eq!(provider.call_count(), 1);
    }
}
