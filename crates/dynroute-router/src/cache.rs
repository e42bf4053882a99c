// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memoized answers keyed by exact query text.
//!
//! Keys are compared byte-for-byte: no trimming, no case folding. Entries
//! never expire. The map is sharded (`DashMap`), so concurrent routes may
//! read and write freely; two in-flight routes for the same uncached query
//! both do the work and the last insert wins.

use std::sync::Arc;

use dashmap::DashMap;

/// Shared query-to-answer cache.
///
/// Cloning is cheap and yields a handle to the same entries, so one cache can
/// be owned by a shell session or batch run and lent to every route call.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<DashMap<String, String>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored answer for `query`, if any.
    pub fn get(&self, query: &str) -> Option<String> {
        self.entries.get(query).map(|entry| entry.value().clone())
    }

    /// Store `answer` under `query`, replacing any previous value.
    pub fn insert(&self, query: impl Into<String>, answer: impl Into<String>) {
        self.entries.insert(query.into(), answer.into());
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop one entry so the next identical query is routed afresh.
    ///
    /// The router never calls this; failure answers stay cached until a
    /// caller decides otherwise.
    pub fn invalidate(&self, query: &str) -> Option<String> {
        self.entries.remove(query).map(|(_, answer)| answer)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
