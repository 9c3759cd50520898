// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FOREST_ID_VALUE: AtomicU64 = AtomicU64::new(1);

/// Ephemeral forest identity.
///
/// A [`SearchCache`](crate::SearchCache) only describes the forest it was
/// filled from. Structurally equal forests may still diverge after one of
/// them is modified, so the cache tells them apart by identity, never by
/// content. Every new or cloned [`Forest`](crate::Forest) gets its own id.
///
/// ```
/// # use forest_ops::{Forest, Node};
/// let forest = Forest::new(vec![Node::new("a")]);
/// let copy = forest.clone();
/// assert_eq!(forest, copy);
/// assert_ne!(forest.id(), copy.id());
/// ```
///
/// Identifiers are only valid within the current process and must not be
/// stored permanently!
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct ForestId(u64);

impl ForestId {
    /// Claim the next identifier.
    ///
    /// A 64-bit counter does not wrap around in practice.
    pub(crate) fn claim() -> Self {
        Self(NEXT_FOREST_ID_VALUE.fetch_add(1, Ordering::Relaxed))
    }
}
