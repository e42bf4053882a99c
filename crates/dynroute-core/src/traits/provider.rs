// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for model endpoints (Hugging Face, test doubles).

use async_trait::async_trait;

use crate::error::DynrouteError;
use crate::types::{ProviderRequest, ProviderResponse};

/// A remote model endpoint.
///
/// Implementations perform exactly one call per `complete` and enforce
/// `request.timeout` themselves; a timeout is reported as an error like any
/// other failure. Retries, if any, belong to the caller.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this endpoint.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, DynrouteError>;
}
