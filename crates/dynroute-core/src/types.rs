// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the router, the endpoints, and the CLI.

use std::time::Duration;

use strum::{Display, EnumIter, EnumString};

/// An execution target: one of the three model tiers a query can run on.
///
/// Each tier is bound to a model endpoint and a prompt template by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Tier {
    /// Small, fast model for short factual queries.
    Simple,
    /// Mid-sized model for explanations and general requests.
    Medium,
    /// Largest model for planning, code, and multi-step reasoning.
    Advanced,
}

/// The assessed complexity of a query.
///
/// Shares its labels with [`Tier`] but describes the request, not where it
/// runs. Parsing is exact and case-sensitive: `"advanced"` is not a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Category {
    Simple,
    /// Fallback when classification fails or is ambiguous.
    #[default]
    Medium,
    Advanced,
}

impl Category {
    /// Parse an exact category label, returning `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// The tier whose complexity matches this category.
    pub fn primary_tier(self) -> Tier {
        match self {
            Category::Simple => Tier::Simple,
            Category::Medium => Tier::Medium,
            Category::Advanced => Tier::Advanced,
        }
    }
}

/// Chat role of a message sent to a model endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message in a provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMessage {
    pub role: Role,
    pub content: String,
}

impl ProviderMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A single-shot completion request to a model endpoint.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Model identifier understood by the endpoint.
    pub model: String,
    /// Rendered prompt: system instruction, optional exemplars, user query.
    pub messages: Vec<ProviderMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Deadline the endpoint enforces for this call.
    pub timeout: Duration,
}

/// A completed response from a model endpoint.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text. May be empty; the router decides what that means.
    pub content: String,
    /// Model that produced the response, as reported by the endpoint.
    pub model: String,
    /// Why generation stopped, if the endpoint reports it.
    pub finish_reason: Option<String>,
}
