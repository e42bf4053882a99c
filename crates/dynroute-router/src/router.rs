// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing with classification, tier fallback, and memoization.
//!
//! Orchestrates one route call: cache lookup > classify > build chain >
//! attempt tiers in order > cache write.

use dynroute_core::Tier;
use tracing::{info, warn};

use crate::cache::QueryCache;
use crate::chain::FallbackChain;
use crate::classifier::QueryClassifier;
use crate::diagnostics::{RouteLog, RouteResult, SENTINEL_ANSWER};
use crate::invoke::{Attempt, TierEndpoints, TierInvoker};

/// Routes queries to model tiers.
///
/// Holds no mutable state of its own; the cache is supplied per call so its
/// lifetime (process, session, batch run) is the caller's choice.
#[derive(Clone)]
pub struct TierRouter {
    classifier: QueryClassifier,
    invoker: TierInvoker,
}

impl TierRouter {
    pub fn new(classifier: QueryClassifier, invoker: TierInvoker) -> Self {
        Self {
            classifier,
            invoker,
        }
    }

    /// Build a router whose classifier calls the Simple tier's endpoint.
    pub fn from_endpoints(endpoints: TierEndpoints) -> Self {
        let classifier = QueryClassifier::new(endpoints.get(Tier::Simple).clone());
        Self::new(classifier, TierInvoker::new(endpoints))
    }

    /// Route a query and return the final answer with its diagnostic log.
    ///
    /// Never fails. A cached answer is returned without classification or
    /// invocation. Otherwise the tiers of the category's fallback chain are
    /// tried in order until one returns non-blank text; if none does, the
    /// sentinel answer is used. Either way the answer is cached before
    /// returning, including the sentinel.
    pub async fn route(&self, query: &str, cache: &QueryCache) -> RouteResult {
        let mut log = RouteLog::new();

        if let Some(answer) = cache.get(query) {
            info!("serving cached answer");
            log.cache_hit();
            return RouteResult {
                answer,
                logs: log.into_lines(),
            };
        }

        let category = self.classifier.classify(query).await;
        info!(category = %category, "query classified");
        log.classified(category);

        let chain = FallbackChain::for_category(category);
        let mut answer = None;

        for tier in chain {
            log.attempting(tier);
            match self.invoker.invoke(tier, query).await {
                Attempt::Answered(text) => {
                    info!(tier = %tier, "tier answered");
                    log.succeeded(tier);
                    answer = Some(text);
                    break;
                }
                Attempt::Empty => log.empty(tier),
                Attempt::Failed(line) => log.failed(line),
            }
        }

        let answer = answer.unwrap_or_else(|| {
            warn!(category = %category, "all tiers failed");
            log.exhausted();
            SENTINEL_ANSWER.to_string()
        });

        cache.insert(query, answer.clone());

        RouteResult {
            answer,
            logs: log.into_lines(),
        }
    }
}
