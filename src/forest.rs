// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use crate::{ForestId, Node};

/// Ordered collection of root nodes.
///
/// Every forest carries a process-unique identity and a revision that is
/// bumped whenever the forest is borrowed mutably. Both are ignored when
/// comparing forests: equality is structural.
#[derive(Debug)]
pub struct Forest {
    id: ForestId,
    revision: u64,
    roots: Vec<Node>,
}

impl Forest {
    #[must_use]
    pub fn new(roots: Vec<Node>) -> Self {
        Self {
            id: ForestId::claim(),
            revision: 0,
            roots,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ForestId {
        self.id
    }

    /// Incremented on every mutable access.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Mutable access to the roots.
    ///
    /// Counts as a modification.
    pub fn roots_mut(&mut self) -> &mut Vec<Node> {
        self.touch();
        &mut self.roots
    }

    #[must_use]
    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in all trees.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots
            .iter()
            .fold(0, |count, root| count + 1 + root.count_descendants())
    }

    /// Check if any node in the forest is named `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.roots.iter().any(|root| root.contains_name(name))
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Deep copy with a new identity.
impl Clone for Forest {
    fn clone(&self) -> Self {
        Self::new(self.roots.clone())
    }
}

impl PartialEq for Forest {
    fn eq(&self, other: &Self) -> bool {
        self.roots == other.roots
    }
}

impl From<Vec<Node>> for Forest {
    fn from(roots: Vec<Node>) -> Self {
        Self::new(roots)
    }
}

impl FromIterator<Node> for Forest {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
