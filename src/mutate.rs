// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use std::collections::VecDeque;

use crate::{error::require_non_empty, Forest, Node, Result};

impl Forest {
    /// Append `new_node` as the last child of the first node named
    /// `parent_name`.
    ///
    /// Parents are searched depth-first in sibling order. Nothing happens
    /// if any node in the forest is already named like `new_node` or if no
    /// parent is found.
    pub fn insert(&mut self, parent_name: &str, new_node: Node) -> Result<&mut Self> {
        require_non_empty("parent name", parent_name)?;
        require_non_empty("name of the new node", &new_node.name)?;
        if self.contains_name(&new_node.name) {
            log::debug!(
                "Skipping insertion of duplicate node {name:?}",
                name = new_node.name
            );
            return Ok(self);
        }
        if let Some(parent) = find_first_mut(self.roots_mut(), parent_name) {
            log::debug!(
                "Inserting node {name:?} under {parent_name:?}",
                name = new_node.name
            );
            parent.push_child(new_node);
        } else {
            log::debug!("No parent node {parent_name:?} found for insertion");
        }
        Ok(self)
    }

    /// Remove all nodes named `name` that are children of another node.
    ///
    /// Roots are never removed. If `preserve_subtree` is set, the children
    /// of a removed node are appended to the children of its parent and
    /// are themselves subject to removal. Otherwise the entire subtree is
    /// discarded.
    pub fn remove(&mut self, name: &str, preserve_subtree: bool) -> Result<&mut Self> {
        require_non_empty("name", name)?;
        let removed = self
            .roots_mut()
            .iter_mut()
            .map(|root| remove_from_children(root, name, preserve_subtree))
            .sum::<usize>();
        log::debug!("Removed {removed} node(s) named {name:?}");
        Ok(self)
    }

    /// Substitute every node named `name` with a copy of `new_node`.
    ///
    /// Matches are replaced on all levels, roots included. The replacements
    /// themselves are not searched. If `preserve_prev_subtree` is set and
    /// `new_node` has no children, each replacement inherits the children
    /// of the node it replaces.
    pub fn replace(
        &mut self,
        name: &str,
        new_node: &Node,
        preserve_prev_subtree: bool,
    ) -> Result<&mut Self> {
        require_non_empty("name", name)?;
        let replaced = replace_in(self.roots_mut(), name, new_node, preserve_prev_subtree);
        log::debug!(
            "Replaced {replaced} node(s) named {name:?} with {new_name:?}",
            new_name = new_node.name
        );
        Ok(self)
    }
}

fn find_first_mut<'a>(nodes: &'a mut [Node], name: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = node
            .sub_mut()
            .and_then(|children| find_first_mut(children, name))
        {
            return Some(found);
        }
    }
    None
}

fn remove_from_children(node: &mut Node, name: &str, preserve_subtree: bool) -> usize {
    let Some(children) = node.take_sub() else {
        return 0;
    };
    let mut removed = 0;
    let mut kept = Vec::with_capacity(children.len());
    let mut pending = VecDeque::from(children);
    while let Some(mut child) = pending.pop_front() {
        if child.name != name {
            kept.push(child);
            continue;
        }
        removed += 1;
        if preserve_subtree {
            if let Some(grandchildren) = child.take_sub() {
                // Promoted after all remaining siblings
                pending.extend(grandchildren);
            }
        }
    }
    for child in &mut kept {
        removed += remove_from_children(child, name, preserve_subtree);
    }
    node.set_sub(kept);
    removed
}

fn replace_in(
    nodes: &mut [Node],
    name: &str,
    new_node: &Node,
    preserve_prev_subtree: bool,
) -> usize {
    let mut replaced = 0;
    for node in nodes {
        if node.name == name {
            let mut replacement = new_node.clone();
            if preserve_prev_subtree && !replacement.has_children() {
                if let Some(prev_children) = node.take_sub() {
                    replacement.set_sub(prev_children);
                }
            }
            *node = replacement;
            replaced += 1;
        } else if let Some(children) = node.sub_mut() {
            replaced += replace_in(children, name, new_node, preserve_prev_subtree);
        }
    }
    replaced
}
