// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for dynroute tests.
//!
//! Provides a scripted model endpoint for fast, deterministic,
//! CI-runnable tests without network access.
//!
//! # Components
//!
//! - [`MockProvider`] - Mock model endpoint with scripted replies and call instrumentation

pub mod mock_provider;

pub use mock_provider::{MockProvider, MockReply};
