// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat-completions request/response types for the Hugging Face router.
//!
//! The router speaks the OpenAI-compatible wire format.

use serde::{Deserialize, Serialize};

/// A single chat message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user", or "assistant".
    pub role: String,
    pub content: String,
}

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

/// Successful completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Text of the first choice, or an empty string when the model said nothing.
    pub fn first_text(&self) -> String {
        self.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default()
    }

    pub fn first_finish_reason(&self) -> Option<String> {
        self.choices.first().and_then(|c| c.finish_reason.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message inside a choice. `content` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error payload. The router returns either `{"error": "..."}` or
/// `{"error": {"message": "...", "type": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Plain(String),
    Detailed {
        message: String,
        #[serde(rename = "type", default)]
        type_: Option<String>,
    },
}

impl ApiErrorBody {
    pub fn describe(&self) -> String {
        match self {
            ApiErrorBody::Plain(message) => message.clone(),
            ApiErrorBody::Detailed {
                message,
                type_: Some(kind),
            } => format!("{kind}: {message}"),
            ApiErrorBody::Detailed { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_openai_shape() {
        let req = ChatRequest {
            model: "meta-llama/Llama-3.2-3B-Instruct".into(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: "Hi".into(),
            }],
            temperature: 0.2,
            max_tokens: 100,
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "meta-llama/Llama-3.2-3B-Instruct");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn response_first_text() {
        let body = r#"{
            "id": "chatcmpl-1",
            "model": "m",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "4"}, "finish_reason": "stop"}]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.first_text(), "4");
        assert_eq!(resp.first_finish_reason().as_deref(), Some("stop"));
    }

    #[test]
    fn null_content_and_no_choices_are_empty() {
        let null: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(null.first_text(), "");

        let none: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(none.first_text(), "");
    }

    #[test]
    fn error_bodies_in_both_shapes() {
        let plain: ApiErrorResponse =
            serde_json::from_str(r#"{"error": "Model is overloaded"}"#).unwrap();
        assert_eq!(plain.error.describe(), "Model is overloaded");

        let detailed: ApiErrorResponse = serde_json::from_str(
            r#"{"error": {"message": "bad token", "type": "authentication_error"}}"#,
        )
        .unwrap();
        assert_eq!(detailed.error.describe(), "authentication_error: bad token");
    }
}
