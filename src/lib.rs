// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

//! Traversal, search, and mutation of ordered forests of labelled trees.

mod error;
pub use self::error::{Error, Result};

mod forest;
pub use self::forest::Forest;

mod forest_id;
pub use self::forest_id::ForestId;

mod metrics;

mod mutate;

mod node;
pub use self::node::{Fields, Node, NAME_FIELD, SUB_FIELD};

mod plain;
pub use self::plain::JsonStyle;

mod search;
pub use self::search::SearchCache;

mod transform;
pub use self::transform::DEPTH_FIELD;

mod traverse;
pub use self::traverse::TraversalOrder;

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;
