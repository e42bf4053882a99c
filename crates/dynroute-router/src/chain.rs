// SPDX-FileCopyrightText: 2026 Dynroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback chain construction.
//!
//! The tier matching the category goes first. Escalation toward stronger
//! tiers comes before de-escalation; the Simple category never de-escalates.

use dynroute_core::{Category, Tier};

/// Ordered tiers to attempt for one query: a permutation of all tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChain([Tier; 3]);

impl FallbackChain {
    /// Build the chain for a category from the fixed order table.
    pub fn for_category(category: Category) -> Self {
        let order = match category {
            Category::Simple => [Tier::Simple, Tier::Medium, Tier::Advanced],
            Category::Medium => [Tier::Medium, Tier::Advanced, Tier::Simple],
            Category::Advanced => [Tier::Advanced, Tier::Medium, Tier::Simple],
        };
        Self(order)
    }

    /// The tier tried first.
    pub fn primary(&self) -> Tier {
        self.0[0]
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }
}

impl IntoIterator for FallbackChain {
    type Item = Tier;
    type IntoIter = std::array::IntoIter<Tier, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
