// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use std::{collections::VecDeque, str::FromStr};

use crate::{Error, Forest, Node};

/// Order in which [`Forest::walk()`] visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum TraversalOrder {
    /// Depth-first, parents before their children.
    #[default]
    #[display(fmt = "pre")]
    PreOrder,

    /// Depth-first, parents after all their children.
    #[display(fmt = "post")]
    PostOrder,

    /// Level by level, starting with the roots.
    #[display(fmt = "breadth")]
    BreadthFirst,
}

impl FromStr for TraversalOrder {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "pre" => Ok(Self::PreOrder),
            "post" => Ok(Self::PostOrder),
            "breadth" => Ok(Self::BreadthFirst),
            _ => Err(Error::invalid_argument(format!(
                "order must be \"pre\", \"post\", or \"breadth\", got {token:?}"
            ))),
        }
    }
}

impl Forest {
    /// Visit every node exactly once.
    ///
    /// The visitor receives the node, its depth (roots are at depth 0),
    /// and its parent (`None` for roots).
    ///
    /// ```
    /// # use forest_ops::{Forest, Node, TraversalOrder};
    /// let forest = Forest::new(vec![Node::with_children("a", vec![Node::new("b")])]);
    /// let mut names = Vec::new();
    /// forest.walk(TraversalOrder::PostOrder, |node, _, _| names.push(node.name.clone()));
    /// assert_eq!(vec!["b", "a"], names);
    /// ```
    pub fn walk<'a>(
        &'a self,
        order: TraversalOrder,
        mut visit: impl FnMut(&'a Node, usize, Option<&'a Node>),
    ) -> &'a Self {
        match order {
            TraversalOrder::PreOrder | TraversalOrder::PostOrder => {
                for root in self.roots() {
                    walk_depth_first(root, 0, None, order, &mut visit);
                }
            }
            TraversalOrder::BreadthFirst => {
                let mut queue = self
                    .roots()
                    .iter()
                    .map(|root| (root, 0, None))
                    .collect::<VecDeque<_>>();
                while let Some((node, depth, parent)) = queue.pop_front() {
                    visit(node, depth, parent);
                    queue.extend(node.children().map(|child| (child, depth + 1, Some(node))));
                }
            }
        }
        self
    }

    /// Visit every node exactly once with mutable access.
    ///
    /// The visitor receives the node and its depth. The parent is still
    /// borrowed while its children are visited and is only available
    /// through [`Self::walk()`].
    ///
    /// The visitor may modify the fields of a node. Replacing the children
    /// during the walk affects which nodes are visited afterwards.
    pub fn walk_mut(
        &mut self,
        order: TraversalOrder,
        mut visit: impl FnMut(&mut Node, usize),
    ) -> &mut Self {
        let roots = self.roots_mut();
        match order {
            TraversalOrder::PreOrder | TraversalOrder::PostOrder => {
                for root in roots.iter_mut() {
                    walk_depth_first_mut(root, 0, order, &mut visit);
                }
            }
            TraversalOrder::BreadthFirst => {
                let mut queue = roots
                    .iter_mut()
                    .map(|root| (root, 0))
                    .collect::<VecDeque<_>>();
                while let Some((node, depth)) = queue.pop_front() {
                    visit(&mut *node, depth);
                    queue.extend(node.children_mut().map(|child| (child, depth + 1)));
                }
            }
        }
        self
    }
}

fn walk_depth_first<'a>(
    node: &'a Node,
    depth: usize,
    parent: Option<&'a Node>,
    order: TraversalOrder,
    visit: &mut impl FnMut(&'a Node, usize, Option<&'a Node>),
) {
    if order == TraversalOrder::PreOrder {
        visit(node, depth, parent);
    }
    for child in node.children() {
        walk_depth_first(child, depth + 1, Some(node), order, visit);
    }
    if order == TraversalOrder::PostOrder {
        visit(node, depth, parent);
    }
}

fn walk_depth_first_mut(
    node: &mut Node,
    depth: usize,
    order: TraversalOrder,
    visit: &mut impl FnMut(&mut Node, usize),
) {
    if order == TraversalOrder::PreOrder {
        visit(&mut *node, depth);
    }
    for child in node.children_mut() {
        walk_depth_first_mut(child, depth + 1, order, visit);
    }
    if order == TraversalOrder::PostOrder {
        visit(node, depth);
    }
}

/// Collect the children of all nodes of a level, preserving order.
pub(crate) fn next_level<'a>(level: &[&'a Node]) -> Vec<&'a Node> {
    level.iter().flat_map(|&node| node.children()).collect()
}
