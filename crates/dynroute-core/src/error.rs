// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the dynroute query router.

use thiserror::Error;

/// The primary error type used across dynroute crates.
///
/// The routing core never returns this type to its callers: classification
/// and tier invocation failures are folded into values. It surfaces at the
/// edges instead (endpoint construction, HTTP calls, file output).
#[derive(Debug, Error)]
pub enum DynrouteError {
    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Model endpoint errors (HTTP failure, API error payload, bad response body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Endpoint call exceeded its tier timeout.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Filesystem errors while writing transcripts.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DynrouteError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        DynrouteError::Provider {
            message: message.into(),
            source: None,
        }
    }
}
