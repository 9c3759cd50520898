// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use regex::Regex;

use crate::{
    error::require_non_empty, traverse::next_level, Error, Forest, ForestId, HashMap, Node,
    Result,
};

impl Forest {
    /// Find the first node named `key` in level order.
    ///
    /// Levels are scanned one after another, siblings in order. The result
    /// is a detached copy that keeps its children only if `include_subtree`
    /// is set.
    ///
    /// Returns `None` if no node matches.
    pub fn key_search(&self, key: &str, include_subtree: bool) -> Result<Option<Node>> {
        require_non_empty("key", key)?;
        let mut level = self.roots().iter().collect::<Vec<_>>();
        while !level.is_empty() {
            if let Some(node) = level.iter().find(|node| node.name == key) {
                let found = if include_subtree {
                    Node::clone(node)
                } else {
                    node.severed()
                };
                return Ok(Some(found));
            }
            level = next_level(&level);
        }
        Ok(None)
    }

    /// Collect all nodes with a name that matches the regular expression.
    ///
    /// Matches are collected level by level. Matching nodes are returned
    /// with their entire subtree and their descendants are not searched
    /// any further.
    pub fn pattern_search(&self, pattern: &str) -> Result<Vec<Node>> {
        let regex = compile_pattern(pattern)?;
        Ok(scan_levels(&regex, self.roots()))
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    require_non_empty("pattern", pattern)?;
    Regex::new(pattern)
        .map_err(|err| Error::invalid_argument(format!("invalid pattern {pattern:?}: {err}")))
}

fn scan_levels(regex: &Regex, roots: &[Node]) -> Vec<Node> {
    let mut matches = Vec::new();
    let mut level = roots.iter().collect::<Vec<_>>();
    while !level.is_empty() {
        let (matched, unmatched): (Vec<_>, Vec<_>) = level
            .into_iter()
            .partition(|node| regex.is_match(&node.name));
        matches.extend(matched.into_iter().cloned());
        level = next_level(&unmatched);
    }
    matches
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheOrigin {
    forest_id: ForestId,
    revision: u64,
}

impl CacheOrigin {
    const fn of(forest: &Forest) -> Self {
        Self {
            forest_id: forest.id(),
            revision: forest.revision(),
        }
    }
}

/// Memoized results of [`Forest::pattern_search()`].
///
/// The cache describes a single forest in a single revision. Searching
/// another forest, or the same forest after it has been modified, discards
/// all previous results.
#[derive(Debug, Clone, Default)]
pub struct SearchCache {
    origin: Option<CacheOrigin>,
    results: HashMap<String, Vec<Node>>,
}

impl SearchCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the forest, reusing a previous result for the same pattern.
    ///
    /// With `bypass_cache` the forest is always scanned and the cached
    /// result for the pattern is refreshed.
    ///
    /// ```
    /// # use forest_ops::{Forest, Node, SearchCache};
    /// let forest = Forest::new(vec![Node::new("report.pdf"), Node::new("photo.jpg")]);
    /// let mut cache = SearchCache::new();
    /// let matches = cache.search(&forest, r"\.pdf$", false)?;
    /// assert_eq!(1, matches.len());
    /// assert!(cache.contains(r"\.pdf$"));
    /// # Ok::<(), forest_ops::Error>(())
    /// ```
    pub fn search(&mut self, forest: &Forest, pattern: &str, bypass_cache: bool) -> Result<&[Node]> {
        let regex = compile_pattern(pattern)?;
        let origin = CacheOrigin::of(forest);
        if self.origin != Some(origin) {
            if !self.results.is_empty() {
                log::debug!(
                    "Discarding {count} cached result(s) for forest {forest_id} (revision {revision})",
                    count = self.results.len(),
                    forest_id = origin.forest_id,
                    revision = origin.revision,
                );
            }
            self.results.clear();
            self.origin = Some(origin);
        }
        if !bypass_cache && self.results.contains_key(pattern) {
            log::trace!("Cache hit for pattern {pattern:?}");
        } else {
            log::trace!("Scanning forest {} for pattern {pattern:?}", origin.forest_id);
            let matches = scan_levels(&regex, forest.roots());
            self.results.insert(pattern.to_owned(), matches);
        }
        Ok(self
            .results
            .get(pattern)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Check if a result for the pattern is cached.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.results.contains_key(pattern)
    }

    /// Number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Discard all cached results.
    pub fn invalidate(&mut self) {
        self.results.clear();
        self.origin = None;
    }
}
