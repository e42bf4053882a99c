// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query complexity classification and tiered model routing.
//!
//! This crate provides:
//! - [`QueryClassifier`]: few-shot classification on the cheapest tier
//! - [`FallbackChain`]: the fixed category-to-tier attempt order
//! - [`QueryCache`]: exact-match answer memoization shared across calls
//! - [`TierInvoker`]: one prompt-rendered call per tier attempt
//! - [`TierRouter`]: the orchestrator tying them together
//!
//! Routing never fails outward. Classification errors fall back to
//! `Medium`, tier errors fall through to the next tier, and an exhausted
//! chain returns [`SENTINEL_ANSWER`].

pub mod cache;
pub mod chain;
pub mod classifier;
pub mod diagnostics;
pub mod invoke;
pub mod prompts;
pub mod router;

pub use cache::QueryCache;
pub use chain::FallbackChain;
pub use classifier::QueryClassifier;
pub use diagnostics::{CLASSIFICATION_MARKER, RouteResult, SENTINEL_ANSWER};
pub use invoke::{Attempt, TierBinding, TierEndpoints, TierInvoker, TierProfile};
pub use router::TierRouter;
