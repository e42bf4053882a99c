// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable diagnostic log lines and the route result.
//!
//! The log is returned to the caller with every answer. Only the
//! classification line is meant to be parsed back (see [`RouteResult::category`]).

use dynroute_core::{Category, Tier};

/// Marker phrase that starts the classification line.
pub const CLASSIFICATION_MARKER: &str = "Query classified as:";

/// Log line recorded when an answer is served from the cache.
pub const CACHE_HIT_LINE: &str = "Fetched from cache.";

/// Log line recorded when every tier in the chain failed.
pub const EXHAUSTED_LINE: &str = "All models failed.";

/// Answer returned (and cached) when every tier in the chain failed.
pub const SENTINEL_ANSWER: &str =
    "Sorry, all models failed to generate a response. Please try again later.";

const ATTEMPT_PREFIX: &str = "Attempting to use ";
const ATTEMPT_SUFFIX: &str = " model...";

/// Format the error line for a failed tier call.
pub fn invocation_error_line(tier: Tier, error: &impl std::fmt::Display) -> String {
    format!("Error from {tier} Model: {error}")
}

/// Ordered diagnostic lines accumulated during one route call.
#[derive(Debug, Default)]
pub struct RouteLog {
    lines: Vec<String>,
}

impl RouteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_hit(&mut self) {
        self.lines.push(CACHE_HIT_LINE.to_string());
    }

    pub fn classified(&mut self, category: Category) {
        self.lines.push(format!("{CLASSIFICATION_MARKER} {category}"));
    }

    pub fn attempting(&mut self, tier: Tier) {
        self.lines
            .push(format!("{ATTEMPT_PREFIX}{tier}{ATTEMPT_SUFFIX}"));
    }

    /// Record a failed attempt; `line` is already formatted by the invoker.
    pub fn failed(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn empty(&mut self, tier: Tier) {
        self.lines
            .push(format!("{tier} model returned an empty response."));
    }

    pub fn succeeded(&mut self, tier: Tier) {
        self.lines.push(format!("Success with {tier} model!"));
    }

    pub fn exhausted(&mut self) {
        self.lines.push(EXHAUSTED_LINE.to_string());
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// The answer for one query plus the diagnostic lines that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    /// Final answer: model output, a cached answer, or [`SENTINEL_ANSWER`].
    pub answer: String,
    /// Diagnostic lines in the order they were recorded.
    pub logs: Vec<String>,
}

impl RouteResult {
    /// The log as a single newline-joined string.
    pub fn log_text(&self) -> String {
        self.logs.join("\n")
    }

    /// Category detected for this query, read from the classification line.
    ///
    /// `None` for cache hits, which skip classification.
    pub fn category(&self) -> Option<Category> {
        self.logs.iter().find_map(|line| {
            line.strip_prefix(CLASSIFICATION_MARKER)
                .and_then(|rest| Category::from_label(rest.trim()))
        })
    }

    /// Whether the answer came straight from the cache.
    pub fn is_cache_hit(&self) -> bool {
        self.logs.first().map(String::as_str) == Some(CACHE_HIT_LINE)
    }

    /// Whether the chain was exhausted and the sentinel answer returned.
    pub fn is_exhausted(&self) -> bool {
        self.answer == SENTINEL_ANSWER
    }

    /// Tiers attempted, in order, as recorded in the log.
    pub fn attempted_tiers(&self) -> Vec<Tier> {
        self.logs
            .iter()
            .filter_map(|line| {
                line.strip_prefix(ATTEMPT_PREFIX)?
                    .strip_suffix(ATTEMPT_SUFFIX)?
                    .parse()
                    .ok()
            })
            .collect()
    }
}
