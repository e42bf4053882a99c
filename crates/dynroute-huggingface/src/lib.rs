// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hugging Face model endpoint for dynroute.
//!
//! Implements [`ProviderAdapter`] over the Hugging Face chat-completions
//! router. One provider instance serves every tier; the model id, sampling
//! parameters, and deadline arrive with each [`ProviderRequest`].

pub mod client;
pub mod types;

use async_trait::async_trait;
use dynroute_config::DynrouteConfig;
use dynroute_core::{DynrouteError, ProviderAdapter, ProviderRequest, ProviderResponse};
use secrecy::SecretString;
use tracing::info;

use crate::client::HuggingFaceClient;
use crate::types::{ChatMessage, ChatRequest};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "HF_API_KEY";

/// Hugging Face provider implementing [`ProviderAdapter`].
///
/// API key resolution order: config -> `HF_API_KEY` env var -> error.
pub struct HuggingFaceProvider {
    client: HuggingFaceClient,
}

impl HuggingFaceProvider {
    /// Creates a provider from the loaded configuration.
    pub fn new(config: &DynrouteConfig) -> Result<Self, DynrouteError> {
        let api_key = resolve_api_key(&config.huggingface.api_key)?;
        let client = HuggingFaceClient::new(api_key, config.huggingface.base_url.clone())?;

        info!(
            base_url = config.huggingface.base_url.as_str(),
            "Hugging Face provider initialized"
        );

        Ok(Self { client })
    }

    /// Creates a provider with an existing client.
    pub fn with_client(client: HuggingFaceClient) -> Self {
        Self { client }
    }

    fn to_chat_request(request: &ProviderRequest) -> ChatRequest {
        ChatRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        }
    }
}

#[async_trait]
impl ProviderAdapter for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, DynrouteError> {
        let chat_request = Self::to_chat_request(&request);
        let response = self
            .client
            .complete_chat(&chat_request, request.timeout)
            .await?;

        Ok(ProviderResponse {
            content: response.first_text(),
            model: response.model.clone().unwrap_or(request.model),
            finish_reason: response.first_finish_reason(),
        })
    }
}

/// Resolves the API key from config first, then the environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<SecretString, DynrouteError> {
    if let Some(key) = config_key.as_deref().filter(|k| !k.is_empty()) {
        return Ok(SecretString::from(key.to_string()));
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(SecretString::from(key)),
        _ => Err(DynrouteError::Config(format!(
            "Hugging Face API key not found. Set huggingface.api_key in config or {API_KEY_ENV} environment variable."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use dynroute_core::ProviderMessage;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn set_env(value: Option<&str>) {
        // SAFETY: env-touching tests are serialized with #[serial].
        unsafe {
            match value {
                Some(v) => std::env::set_var(API_KEY_ENV, v),
                None => std::env::remove_var(API_KEY_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn api_key_from_config_wins() {
        set_env(Some("hf_env"));
        let key = resolve_api_key(&Some("hf_config".into())).unwrap();
        assert_eq!(key.expose_secret(), "hf_config");
        set_env(None);
    }

    #[test]
    #[serial]
    fn empty_config_key_falls_back_to_env() {
        set_env(Some("hf_env"));
        let key = resolve_api_key(&Some(String::new())).unwrap();
        assert_eq!(key.expose_secret(), "hf_env");
        set_env(None);
    }

    #[test]
    #[serial]
    fn missing_key_is_config_error() {
        set_env(None);
        let err = resolve_api_key(&None).unwrap_err();
        assert!(matches!(err, DynrouteError::Config(_)));
        assert!(err.to_string().contains("HF_API_KEY"), "got: {err}");
    }

    #[test]
    #[serial]
    fn provider_new_requires_key() {
        set_env(None);
        let config = DynrouteConfig::default();
        assert!(HuggingFaceProvider::new(&config).is_err());

        let mut config = DynrouteConfig::default();
        config.huggingface.api_key = Some("hf_config".into());
        assert!(HuggingFaceProvider::new(&config).is_ok());
    }

    #[test]
    fn request_conversion_keeps_roles_and_params() {
        let request = ProviderRequest {
            model: "mistralai/Mixtral-8x7B-Instruct-v0.1".into(),
            messages: vec![
                ProviderMessage::system("Be thorough."),
                ProviderMessage::user("Plan a trip"),
            ],
            temperature: 0.7,
            max_tokens: 1024,
            timeout: Duration::from_secs(180),
        };

        let chat = HuggingFaceProvider::to_chat_request(&request);
        assert_eq!(chat.model, "mistralai/Mixtral-8x7B-Instruct-v0.1");
        assert_eq!(chat.messages[0].role, "system");
        assert_eq!(chat.messages[1].role, "user");
        assert_eq!(chat.messages[1].content, "Plan a trip");
        assert_eq!(chat.max_tokens, 1024);
        assert!(!chat.stream);
    }

    #[tokio::test]
    async fn complete_maps_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "model": "meta-llama/Meta-Llama-3-8B-Instruct"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": {"role": "assistant", "content": "An engine burns fuel."},
                    "finish_reason": "length"
                }]
            })))
            .mount(&server)
            .await;

        let client =
            HuggingFaceClient::new(SecretString::from("hf_test".to_string()), server.uri()).unwrap();
        let provider = HuggingFaceProvider::with_client(client);

        let response = provider
            .complete(ProviderRequest {
                model: "meta-llama/Meta-Llama-3-8B-Instruct".into(),
                messages: vec![ProviderMessage::user("Explain engines")],
                temperature: 0.5,
                max_tokens: 500,
                timeout: Duration::from_secs(5),
            })
            .await
            .unwrap();

        assert_eq!(response.content, "An engine burns fuel.");
        assert_eq!(response.model, "meta-llama/Meta-Llama-3-8B-Instruct");
        assert_eq!(response.finish_reason.as_deref(), Some("length"));
        assert_eq!(provider.name(), "huggingface");
    }
}
