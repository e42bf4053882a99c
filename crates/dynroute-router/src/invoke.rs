// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tier bindings and single-attempt tier invocation.

use std::sync::Arc;
use std::time::Duration;

use dynroute_config::model::{TierConfig, TiersConfig};
use dynroute_core::{ProviderAdapter, ProviderMessage, ProviderRequest, Tier};
use tracing::{debug, warn};

use crate::diagnostics::invocation_error_line;
use crate::prompts;

/// Generation parameters for one tier. Fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TierProfile {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl From<&TierConfig> for TierProfile {
    fn from(config: &TierConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_new_tokens,
            timeout: config.timeout(),
        }
    }
}

/// A model endpoint plus the parameters it is called with.
#[derive(Clone)]
pub struct TierBinding {
    pub endpoint: Arc<dyn ProviderAdapter>,
    pub profile: TierProfile,
}

impl TierBinding {
    pub fn new(endpoint: Arc<dyn ProviderAdapter>, profile: TierProfile) -> Self {
        Self { endpoint, profile }
    }

    pub(crate) fn request(&self, messages: Vec<ProviderMessage>) -> ProviderRequest {
        ProviderRequest {
            model: self.profile.model.clone(),
            messages,
            temperature: self.profile.temperature,
            max_tokens: self.profile.max_tokens,
            timeout: self.profile.timeout,
        }
    }
}

/// One binding per tier.
#[derive(Clone)]
pub struct TierEndpoints {
    simple: TierBinding,
    medium: TierBinding,
    advanced: TierBinding,
}

impl TierEndpoints {
    pub fn new(simple: TierBinding, medium: TierBinding, advanced: TierBinding) -> Self {
        Self {
            simple,
            medium,
            advanced,
        }
    }

    /// Bind one endpoint to all three tiers, each with its configured model.
    pub fn from_config(endpoint: Arc<dyn ProviderAdapter>, tiers: &TiersConfig) -> Self {
        Self::new(
            TierBinding::new(endpoint.clone(), TierProfile::from(&tiers.simple)),
            TierBinding::new(endpoint.clone(), TierProfile::from(&tiers.medium)),
            TierBinding::new(endpoint, TierProfile::from(&tiers.advanced)),
        )
    }

    pub fn get(&self, tier: Tier) -> &TierBinding {
        match tier {
            Tier::Simple => &self.simple,
            Tier::Medium => &self.medium,
            Tier::Advanced => &self.advanced,
        }
    }
}

/// Outcome of one tier attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The endpoint returned non-blank text.
    Answered(String),
    /// The call succeeded but the text was empty or whitespace.
    Empty,
    /// The call failed; carries the formatted diagnostic line.
    Failed(String),
}

/// Renders tier prompts and calls the bound endpoint once per attempt.
#[derive(Clone)]
pub struct TierInvoker {
    endpoints: TierEndpoints,
}

impl TierInvoker {
    pub fn new(endpoints: TierEndpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &TierEndpoints {
        &self.endpoints
    }

    /// Invoke `tier` with `query`. Never retries and never errors.
    pub async fn invoke(&self, tier: Tier, query: &str) -> Attempt {
        let binding = self.endpoints.get(tier);
        let request = binding.request(prompts::tier_messages(tier, query));

        debug!(
            tier = %tier,
            endpoint = binding.endpoint.name(),
            model = binding.profile.model.as_str(),
            "invoking tier"
        );

        match binding.endpoint.complete(request).await {
            Ok(response) if response.content.trim().is_empty() => {
                debug!(tier = %tier, "tier returned empty text");
                Attempt::Empty
            }
            Ok(response) => Attempt::Answered(response.content),
            Err(e) => {
                let line = invocation_error_line(tier, &e);
                warn!(tier = %tier, error = %e, "tier invocation failed");
                Attempt::Failed(line)
            }
        }
    }
}
