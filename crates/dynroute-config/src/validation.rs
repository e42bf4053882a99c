// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as temperature ranges, non-zero timeouts, and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::{DynrouteConfig, TierConfig};

/// Log levels accepted by `general.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DynrouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.general.normalized_log_level();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "general.log_level `{}` must be one of: {}",
                config.general.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.huggingface.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "huggingface.base_url must not be empty".to_string(),
        });
    }

    validate_tier("simple", &config.tiers.simple, &mut errors);
    validate_tier("medium", &config.tiers.medium, &mut errors);
    validate_tier("advanced", &config.tiers.advanced, &mut errors);

    if config.batch.answers_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "batch.answers_path must not be empty".to_string(),
        });
    }

    if config.batch.logs_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "batch.logs_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_tier(name: &str, tier: &TierConfig, errors: &mut Vec<ConfigError>) {
    if tier.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("tiers.{name}.model must not be empty"),
        });
    }

    if !(0.0..=2.0).contains(&tier.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "tiers.{name}.temperature must be between 0.0 and 2.0, got {}",
                tier.temperature
            ),
        });
    }

    if tier.max_new_tokens < 1 {
        errors.push(ConfigError::Validation {
            message: format!("tiers.{name}.max_new_tokens must be at least 1"),
        });
    }

    if tier.timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: format!("tiers.{name}.timeout_secs must be at least 1"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = DynrouteConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_model_fails_validation() {
        let mut config = DynrouteConfig::default();
        config.tiers.medium.model = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "tiers.medium.model"));
    }

    #[test]
    fn out_of_range_temperature_fails_validation() {
        let mut config = DynrouteConfig::default();
        config.tiers.advanced.temperature = 3.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "tiers.advanced.temperature"));
    }

    #[test]
    fn zero_timeout_and_tokens_fail_validation() {
        let mut config = DynrouteConfig::default();
        config.tiers.simple.timeout_secs = 0;
        config.tiers.simple.max_new_tokens = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "tiers.simple.timeout_secs"));
        assert!(has_message(&errors, "tiers.simple.max_new_tokens"));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = DynrouteConfig::default();
        config.general.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "general.log_level"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = DynrouteConfig::default();
        config.general.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn padded_log_level_validates_in_normalized_form() {
        let config: DynrouteConfig = toml::from_str(
            r#"
[general]
log_level = " Debug "
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.general.normalized_log_level(), "debug");
    }

    #[test]
    fn collects_all_errors() {
        let mut config = DynrouteConfig::default();
        config.huggingface.base_url = String::new();
        config.batch.answers_path = String::new();
        config.batch.logs_path = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_custom_config_passes() {
        let config: DynrouteConfig = toml::from_str(
            r#"
[tiers.simple]
model = "Qwen/Qwen2.5-1.5B-Instruct"
temperature = 0.0
max_new_tokens = 100
timeout_secs = 60

[tiers.advanced]
model = "mistralai/Mixtral-8x7B-Instruct-v0.1"
temperature = 2.0
max_new_tokens = 1024
timeout_secs = 180

[batch]
answers_path = "/tmp/answers.txt"
"#,
        )
        .unwrap();
        assert_eq!(config.tiers.simple.model, "Qwen/Qwen2.5-1.5B-Instruct");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn toml_values_out_of_range_collect_errors() {
        let config: DynrouteConfig = toml::from_str(
            r#"
[general]
log_level = "loud"

[tiers.medium]
model = ""
temperature = -0.1
max_new_tokens = 500
timeout_secs = 120
"#,
        )
        .unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "general.log_level"));
        assert!(has_message(&errors, "tiers.medium.model"));
        assert!(has_message(&errors, "tiers.medium.temperature"));
    }
}
