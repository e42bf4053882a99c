// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Hugging Face chat-completions router.
//!
//! Provides [`HuggingFaceClient`] which handles request construction,
//! bearer authentication, and per-call deadlines. Each call is a single
//! attempt; fallback across tiers happens above this layer.

use std::time::Duration;

use dynroute_core::DynrouteError;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

/// HTTP client for Hugging Face router communication.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl HuggingFaceClient {
    /// Creates a new client posting to `base_url`.
    pub fn new(api_key: SecretString, base_url: String) -> Result<Self, DynrouteError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DynrouteError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one completion request, bounded by `timeout`.
    ///
    /// Non-2xx statuses become provider errors carrying the API's message
    /// when the body parses, or the raw body otherwise. No retry.
    pub async fn complete_chat(
        &self,
        request: &ChatRequest,
        timeout: Duration,
    ) -> Result<ChatResponse, DynrouteError> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(self.api_key.expose_secret())
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        debug!(status = %status, model = request.model.as_str(), "completion response received");

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!("Hugging Face API error ({status}): {}", api_err.error.describe()),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(DynrouteError::provider(message));
        }

        serde_json::from_str(&body).map_err(|e| DynrouteError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> DynrouteError {
    if e.is_timeout() {
        DynrouteError::Timeout { duration: timeout }
    } else {
        DynrouteError::Provider {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        }
    }
}
