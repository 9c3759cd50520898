// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Extra fields of a node, opaque to all structural operations.
pub type Fields = Map<String, Value>;

/// Name of the required label field in the plain representation.
pub const NAME_FIELD: &str = "name";

/// Name of the children field in the plain representation.
pub const SUB_FIELD: &str = "sub";

/// A labelled node with optional, ordered children.
///
/// The children are either absent or a non-empty sequence. All methods
/// that replace the children collapse an empty sequence to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The label. Not required to be unique.
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_sub")]
    sub: Option<Vec<Node>>,

    /// Arbitrary extra fields that are passed through unmodified.
    #[serde(flatten)]
    pub fields: Fields,
}

fn deserialize_sub<'de, D>(deserializer: D) -> Result<Option<Vec<Node>>, D::Error>
where
    D: Deserializer<'de>,
{
    let sub = Option::<Vec<Node>>::deserialize(deserializer)?;
    Ok(sub.filter(|children| !children.is_empty()))
}

impl Node {
    /// Construct a leaf node without extra fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub: None,
            fields: Fields::new(),
        }
    }

    /// Construct a node with the given children.
    ///
    /// ```
    /// # use forest_ops::Node;
    /// let node = Node::with_children("a", vec![]);
    /// assert!(node.sub().is_none());
    /// ```
    #[must_use]
    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        let mut node = Self::new(name);
        node.set_sub(children);
        node
    }

    /// Builder-style setter for an extra field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The children, `None` if absent.
    #[must_use]
    pub fn sub(&self) -> Option<&[Node]> {
        self.sub.as_deref()
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.sub.is_some()
    }

    /// Iterate over the direct children.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.sub.iter().flatten()
    }

    /// Iterate mutably over the direct children.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> + '_ {
        self.sub.iter_mut().flatten()
    }

    pub(crate) fn sub_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.sub.as_mut()
    }

    /// Replace the children.
    ///
    /// An empty sequence removes the children.
    pub fn set_sub(&mut self, children: Vec<Node>) {
        self.sub = if children.is_empty() {
            None
        } else {
            Some(children)
        };
    }

    /// Detach and return the children, leaving them absent.
    pub fn take_sub(&mut self) -> Option<Vec<Node>> {
        self.sub.take()
    }

    /// Append a child as the last one.
    pub fn push_child(&mut self, child: Node) {
        self.sub.get_or_insert_with(Vec::new).push(child);
    }

    /// Copy of this node without any children.
    #[must_use]
    pub fn severed(&self) -> Self {
        Self {
            name: self.name.clone(),
            sub: None,
            fields: self.fields.clone(),
        }
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Total number of descendants (recursively).
    #[must_use]
    pub fn count_descendants(&self) -> usize {
        self.children()
            .fold(0, |count, child| count + 1 + child.count_descendants())
    }

    /// Check if this node or any of its descendants is named `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.name == name || self.children().any(|child| child.contains_name(name))
    }
}
