// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the dynroute query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level dynroute configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to the values of the reference deployment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DynrouteConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Hugging Face inference endpoint settings.
    #[serde(default)]
    pub huggingface: HuggingFaceConfig,

    /// Per-tier model bindings and generation parameters.
    #[serde(default)]
    pub tiers: TiersConfig,

    /// Output locations for the batch driver.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl GeneralConfig {
    /// `log_level` trimmed and lowercased, the form validation checks and
    /// tracing filters accept.
    pub fn normalized_log_level(&self) -> String {
        self.log_level.trim().to_lowercase()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Hugging Face inference endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HuggingFaceConfig {
    /// API token. `None` falls back to the `HF_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat-completions URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://router.huggingface.co/v1/chat/completions".to_string()
}

/// Model binding and generation parameters for one tier.
///
/// Fields have no per-field defaults because each tier's defaults differ;
/// the layered loader merges partial `[tiers.<name>]` tables over
/// [`TiersConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    /// Model repository id served by the endpoint.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Maximum tokens to generate per response.
    pub max_new_tokens: u32,

    /// Per-call deadline enforced by the endpoint, in seconds.
    pub timeout_secs: u64,
}

impl TierConfig {
    /// The call deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The three tier bindings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TiersConfig {
    /// Smallest, lowest-latency model. Also used for classification.
    #[serde(default = "default_simple_tier")]
    pub simple: TierConfig,

    #[serde(default = "default_medium_tier")]
    pub medium: TierConfig,

    #[serde(default = "default_advanced_tier")]
    pub advanced: TierConfig,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            simple: default_simple_tier(),
            medium: default_medium_tier(),
            advanced: default_advanced_tier(),
        }
    }
}

fn default_simple_tier() -> TierConfig {
    TierConfig {
        model: "meta-llama/Llama-3.2-3B-Instruct".to_string(),
        temperature: 0.2,
        max_new_tokens: 100,
        timeout_secs: 60,
    }
}

fn default_medium_tier() -> TierConfig {
    TierConfig {
        model: "meta-llama/Meta-Llama-3-8B-Instruct".to_string(),
        temperature: 0.5,
        max_new_tokens: 500,
        timeout_secs: 120,
    }
}

fn default_advanced_tier() -> TierConfig {
    TierConfig {
        model: "mistralai/Mixtral-8x7B-Instruct-v0.1".to_string(),
        temperature: 0.7,
        max_new_tokens: 1024,
        timeout_secs: 180,
    }
}

/// Batch driver output locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Where the answers transcript is written.
    #[serde(default = "default_answers_path")]
    pub answers_path: String,

    /// Where the logs transcript is written.
    #[serde(default = "default_logs_path")]
    pub logs_path: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            answers_path: default_answers_path(),
            logs_path: default_logs_path(),
        }
    }
}

fn default_answers_path() -> String {
    "Answers.txt".to_string()
}

fn default_logs_path() -> String {
    "logs.txt".to_string()
}
