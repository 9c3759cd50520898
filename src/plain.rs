// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use serde_json::{Map, Value};

use crate::{Error, Forest, Node, Result, NAME_FIELD, SUB_FIELD};

/// Formatting of JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line without whitespace.
    Compact,

    /// Indented with two spaces.
    #[default]
    Pretty,
}

impl Forest {
    /// Convert into a plain array of node objects.
    ///
    /// Every node becomes an object with the fields `name`, `sub` (`null`
    /// if absent), and all extra fields.
    #[must_use]
    pub fn to_plain(&self) -> Value {
        self.to_plain_with(std::convert::identity)
    }

    /// Convert into a plain array of node objects, transforming each node
    /// first.
    ///
    /// The children of a node are taken from the transformed node and are
    /// transformed themselves.
    #[must_use]
    pub fn to_plain_with(&self, mut transform: impl FnMut(Node) -> Node) -> Value {
        Value::Array(
            self.roots()
                .iter()
                .map(|root| node_to_plain(root.clone(), &mut transform))
                .collect(),
        )
    }

    pub fn to_json(&self, style: JsonStyle) -> Result<String> {
        plain_to_json(&self.to_plain(), style)
    }

    pub fn to_json_with(
        &self,
        style: JsonStyle,
        transform: impl FnMut(Node) -> Node,
    ) -> Result<String> {
        plain_to_json(&self.to_plain_with(transform), style)
    }

    /// Reconstruct a forest from a plain array of node objects.
    ///
    /// Fails with [`Error::InvalidArgument`] if the value is not an array
    /// and with [`Error::DecodeFailure`] if a node cannot be decoded.
    pub fn from_plain(value: Value) -> Result<Self> {
        Self::from_plain_with(value, std::convert::identity)
    }

    /// Reconstruct a forest from a plain array, transforming each decoded
    /// node before its children.
    pub fn from_plain_with(value: Value, mut transform: impl FnMut(Node) -> Node) -> Result<Self> {
        let Value::Array(elements) = value else {
            return Err(Error::invalid_argument(
                "plain forest must be an array of nodes",
            ));
        };
        elements
            .into_iter()
            .map(|element| -> Result<Node> {
                let node = serde_json::from_value::<Node>(element)?;
                Ok(transform_recursively(node, &mut transform))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Parse JSON text into a forest.
    ///
    /// ```
    /// # use forest_ops::Forest;
    /// let forest = Forest::from_json(r#"[{"name": "a", "sub": [{"name": "b", "sub": null}]}]"#)?;
    /// assert_eq!(1, forest.depth());
    /// assert!(Forest::from_json("[{").is_err());
    /// # Ok::<(), forest_ops::Error>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_plain(serde_json::from_str(text)?)
    }

    pub fn from_json_with(text: &str, transform: impl FnMut(Node) -> Node) -> Result<Self> {
        Self::from_plain_with(serde_json::from_str(text)?, transform)
    }
}

fn node_to_plain(node: Node, transform: &mut impl FnMut(Node) -> Node) -> Value {
    let mut node = transform(node);
    let sub = node.take_sub().map_or(Value::Null, |children| {
        Value::Array(
            children
                .into_iter()
                .map(|child| node_to_plain(child, transform))
                .collect(),
        )
    });
    let Node { name, fields, .. } = node;
    let mut object = Map::with_capacity(fields.len() + 2);
    object.extend(fields);
    object.insert(NAME_FIELD.to_owned(), Value::String(name));
    object.insert(SUB_FIELD.to_owned(), sub);
    Value::Object(object)
}

fn transform_recursively(node: Node, transform: &mut impl FnMut(Node) -> Node) -> Node {
    let mut node = transform(node);
    if let Some(children) = node.take_sub() {
        let children = children
            .into_iter()
            .map(|child| transform_recursively(child, transform))
            .collect();
        node.set_sub(children);
    }
    node
}

fn plain_to_json(value: &Value, style: JsonStyle) -> Result<String> {
    let json = match style {
        JsonStyle::Compact => serde_json::to_string(value),
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
    };
    json.map_err(Error::EncodeFailure)
}
