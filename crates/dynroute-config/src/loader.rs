// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./dynroute.toml` > `~/.config/dynroute/dynroute.toml` > `/etc/dynroute/dynroute.toml`
//! with environment variable overrides via `DYNROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DynrouteConfig;

/// Top-level sections whose keys map one level deep (`section.key`).
const FLAT_SECTIONS: &[&str] = &["general", "huggingface", "batch"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/dynroute/dynroute.toml` (system-wide)
/// 3. `~/.config/dynroute/dynroute.toml` (user XDG config)
/// 4. `./dynroute.toml` (local directory)
/// 5. `DYNROUTE_*` environment variables
pub fn load_config() -> Result<DynrouteConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string layered over the defaults only.
///
/// No files or environment variables are consulted; used by tests and
/// explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<DynrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DynrouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DynrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DynrouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DynrouteConfig::default()))
        .merge(Toml::file("/etc/dynroute/dynroute.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("dynroute/dynroute.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("dynroute.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider with explicit key mapping.
///
/// Keys contain underscores (`max_new_tokens`), so `Env::split("_")` would
/// produce wrong paths. `map_env_key` places the dots instead.
fn env_provider() -> Env {
    Env::prefixed("DYNROUTE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a config path.
///
/// `huggingface_api_key` -> `huggingface.api_key`,
/// `tiers_simple_max_new_tokens` -> `tiers.simple.max_new_tokens`.
pub fn map_env_key(key: &str) -> String {
    if let Some(rest) = key.strip_prefix("tiers_") {
        return match rest.split_once('_') {
            Some((tier, field)) => format!("tiers.{tier}.{field}"),
            None => format!("tiers.{rest}"),
        };
    }

    for section in FLAT_SECTIONS {
        if let Some(field) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{field}");
        }
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_flat_section_keys() {
        assert_eq!(map_env_key("huggingface_api_key"), "huggingface.api_key");
        assert_eq!(map_env_key("huggingface_base_url"), "huggingface.base_url");
        assert_eq!(map_env_key("general_log_level"), "general.log_level");
        assert_eq!(map_env_key("batch_answers_path"), "batch.answers_path");
    }

    #[test]
    fn maps_tier_keys_with_underscored_fields() {
        assert_eq!(map_env_key("tiers_simple_model"), "tiers.simple.model");
        assert_eq!(
            map_env_key("tiers_advanced_max_new_tokens"),
            "tiers.advanced.max_new_tokens"
        );
        assert_eq!(
            map_env_key("tiers_medium_timeout_secs"),
            "tiers.medium.timeout_secs"
        );
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(map_env_key("something_else"), "something_else");
    }
}
