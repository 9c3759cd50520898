// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use crate::{traverse::next_level, Error, Forest, Node, Result};

impl Forest {
    /// Number of levels below the roots.
    ///
    /// Counts how often the level expansion produces at least one node.
    /// A forest without any children has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut level = self.roots().iter().collect::<Vec<_>>();
        let mut depth = 0;
        loop {
            level = next_level(&level);
            if level.is_empty() {
                return depth;
            }
            depth += 1;
        }
    }

    /// Maximum number of nodes on any level, the roots included.
    #[must_use]
    pub fn width(&self) -> usize {
        let mut level = self.roots().iter().collect::<Vec<_>>();
        let mut width = 0;
        while !level.is_empty() {
            width = width.max(level.len());
            level = next_level(&level);
        }
        width
    }

    /// Extract the nodes of level `start` as a new forest.
    ///
    /// All subtrees in the result are cut off below level `end` (absolute),
    /// i.e. nodes on level `end` lose their children. The cut-off defaults
    /// to the depth of the forest which keeps the subtrees intact.
    ///
    /// Fails if an explicit `end` is above `start`. Without `end` a `start`
    /// below the deepest level yields an empty forest.
    pub fn level_slice(&self, start: usize, end: Option<usize>) -> Result<Forest> {
        let max_relative_depth = match end {
            Some(end) => end.checked_sub(start).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "end level {end} must not be above start level {start}"
                ))
            })?,
            None => self.depth().saturating_sub(start),
        };
        let mut level = self.roots().iter().collect::<Vec<_>>();
        for _ in 0..start {
            if level.is_empty() {
                break;
            }
            level = next_level(&level);
        }
        let mut roots = level.into_iter().cloned().collect::<Vec<_>>();
        truncate_below(&mut roots, max_relative_depth);
        log::debug!(
            "Sliced {count} node(s) from level {start} keeping {max_relative_depth} level(s) below",
            count = roots.len()
        );
        Ok(Forest::new(roots))
    }
}

fn truncate_below(nodes: &mut [Node], remaining_depth: usize) {
    if remaining_depth == 0 {
        for node in nodes {
            node.take_sub();
        }
        return;
    }
    for node in nodes {
        if let Some(children) = node.sub_mut() {
            truncate_below(children, remaining_depth - 1);
        }
    }
}
