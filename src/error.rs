// SPDX-FileCopyrightText: The forest-ops authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

/// Failures of forest operations.
///
/// Queries that find nothing return `None` instead of an error, and
/// mutations that have nothing to do (inserting a duplicate name, removing
/// an unknown name) succeed silently.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument has the wrong shape or a required value is missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// External text could not be decoded into a forest.
    #[error("decode failure: {0}")]
    DecodeFailure(#[from] serde_json::Error),

    /// A forest could not be encoded as text.
    #[error("encode failure: {0}")]
    EncodeFailure(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject empty names, keys, and patterns.
pub(crate) fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{what} is required")));
    }
    Ok(())
}
