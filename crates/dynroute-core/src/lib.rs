// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the dynroute query router.
//!
//! This crate provides the error type, the tier and category enumerations,
//! the provider request/response types, and the [`ProviderAdapter`] trait
//! that every model endpoint implements.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DynrouteError;
pub use traits::ProviderAdapter;
pub use types::{Category, ProviderMessage, ProviderRequest, ProviderResponse, Role, Tier};
