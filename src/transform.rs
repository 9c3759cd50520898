// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use serde_json::Value;

use crate::{
    error::require_non_empty, Error, Forest, Node, Result, TraversalOrder, NAME_FIELD, SUB_FIELD,
};

/// Field that [`Forest::flatten()`] uses for tagging nodes with their depth.
pub const DEPTH_FIELD: &str = "depth";

impl Forest {
    /// Reverse the order of the roots, and of all descendants unless `shallow`.
    pub fn flip(&mut self, shallow: bool) -> &mut Self {
        let roots = self.roots_mut();
        roots.reverse();
        if !shallow {
            for root in roots.iter_mut() {
                flip_children(root);
            }
        }
        self
    }

    /// Sort the roots by name, and all descendants unless `shallow`.
    ///
    /// Names are compared by code point. The sort is stable.
    pub fn sort(&mut self, shallow: bool) -> &mut Self {
        let roots = self.roots_mut();
        sort_by_name(roots);
        if !shallow {
            for root in roots.iter_mut() {
                sort_children(root);
            }
        }
        self
    }

    /// Replace the field `key` of every node with the result of `map`.
    ///
    /// `map` receives the current value, `None` if the field is missing.
    /// Returning `None` removes the field.
    ///
    /// Names are passed as strings and must be mapped to strings, otherwise
    /// the forest is left unmodified. The children field `sub` cannot be
    /// mapped.
    pub fn map_field(
        &mut self,
        key: &str,
        mut map: impl FnMut(Option<Value>) -> Option<Value>,
    ) -> Result<&mut Self> {
        require_non_empty("key", key)?;
        if key == SUB_FIELD {
            return Err(Error::invalid_argument(format!(
                "cannot map structural field {key:?}"
            )));
        }
        if key == NAME_FIELD {
            return self.map_name_values(map);
        }
        Ok(self.walk_mut(TraversalOrder::PreOrder, |node, _| {
            let value = node.fields.remove(key);
            if let Some(value) = map(value) {
                node.fields.insert(key.to_owned(), value);
            }
        }))
    }

    fn map_name_values(
        &mut self,
        mut map: impl FnMut(Option<Value>) -> Option<Value>,
    ) -> Result<&mut Self> {
        let mut renamed = self.roots().to_vec();
        let mut rejected = None;
        for root in &mut renamed {
            rename_checked(root, &mut map, &mut rejected);
        }
        if let Some(value) = rejected {
            return Err(Error::invalid_argument(format!(
                "names must be mapped to strings, got {value:?}"
            )));
        }
        *self.roots_mut() = renamed;
        Ok(self)
    }

    /// Rename every node.
    pub fn map_names(&mut self, mut map: impl FnMut(&str) -> String) -> &mut Self {
        self.walk_mut(TraversalOrder::PreOrder, |node, _| {
            node.name = map(&node.name);
        })
    }

    /// Keep only the nodes that satisfy the predicate.
    ///
    /// A kept node either retains its entire subtree (`keep_subtree`) or
    /// has its children filtered recursively. The surviving descendants of
    /// a dropped node take its place, in order.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&Node) -> bool, keep_subtree: bool) -> Forest {
        Forest::new(filter_nodes(self.roots(), &mut predicate, keep_subtree))
    }

    /// Collect copies of all nodes that satisfy the predicate in pre-order.
    ///
    /// The descendants of a matching node are tested as well, even if the
    /// copy includes them (`include_subtree`).
    #[must_use]
    pub fn find(&self, mut predicate: impl FnMut(&Node) -> bool, include_subtree: bool) -> Vec<Node> {
        let mut found = Vec::new();
        self.walk(TraversalOrder::PreOrder, |node, _, _| {
            if !predicate(node) {
                return;
            }
            found.push(if include_subtree {
                node.clone()
            } else {
                node.severed()
            });
        });
        found
    }

    /// List copies of all nodes in pre-order, without their children.
    ///
    /// With `include_depth` every node gets the extra field
    /// [`DEPTH_FIELD`] (roots are at depth 0).
    #[must_use]
    pub fn flatten(&self, include_depth: bool) -> Vec<Node> {
        let mut flat = Vec::with_capacity(self.node_count());
        self.walk(TraversalOrder::PreOrder, |node, depth, _| {
            let mut flat_node = node.severed();
            if include_depth {
                flat_node
                    .fields
                    .insert(DEPTH_FIELD.to_owned(), Value::from(depth));
            }
            flat.push(flat_node);
        });
        flat
    }

    /// Check if both forests have the same shape and names.
    ///
    /// Extra fields are ignored.
    #[must_use]
    pub fn compare(&self, other: &Forest) -> bool {
        same_names(self.roots(), other.roots())
    }
}

fn rename_checked(
    node: &mut Node,
    map: &mut impl FnMut(Option<Value>) -> Option<Value>,
    rejected: &mut Option<Option<Value>>,
) {
    if rejected.is_some() {
        return;
    }
    match map(Some(Value::String(std::mem::take(&mut node.name)))) {
        Some(Value::String(name)) => node.name = name,
        other => {
            *rejected = Some(other);
            return;
        }
    }
    for child in node.children_mut() {
        rename_checked(child, map, rejected);
    }
}

fn flip_children(node: &mut Node) {
    if let Some(children) = node.sub_mut() {
        children.reverse();
        children.iter_mut().for_each(flip_children);
    }
}

fn sort_by_name(nodes: &mut [Node]) {
    nodes.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
}

fn sort_children(node: &mut Node) {
    if let Some(children) = node.sub_mut() {
        sort_by_name(children);
        children.iter_mut().for_each(sort_children);
    }
}

fn filter_nodes(
    nodes: &[Node],
    predicate: &mut impl FnMut(&Node) -> bool,
    keep_subtree: bool,
) -> Vec<Node> {
    let mut kept = Vec::new();
    for node in nodes {
        if !predicate(node) {
            // Promote the surviving descendants
            if let Some(children) = node.sub() {
                kept.extend(filter_nodes(children, predicate, keep_subtree));
            }
            continue;
        }
        if keep_subtree {
            kept.push(node.clone());
            continue;
        }
        let mut filtered = node.severed();
        if let Some(children) = node.sub() {
            filtered.set_sub(filter_nodes(children, predicate, keep_subtree));
        }
        kept.push(filtered);
    }
    kept
}

fn same_names(lhs: &[Node], rhs: &[Node]) -> bool {
    lhs.len() == rhs.len()
        && lhs.iter().zip(rhs).all(|(lhs, rhs)| {
            lhs.name == rhs.name
                && same_names(lhs.sub().unwrap_or_default(), rhs.sub().unwrap_or_default())
        })
}
