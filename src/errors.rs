use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The container a segment needs in order to descend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `[]` and `[i]` iterate an array.
    Sequence,
    /// A field name looks up a key in an object.
    Mapping,
}

impl Expected {
    /// Verb phrase for the step that needed this container.
    fn action(&self) -> &'static str {
        match self {
            Expected::Sequence => "index over",
            Expected::Mapping => "look up field in",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Sequence => f.write_str("sequence"),
            Expected::Mapping => f.write_str("mapping"),
        }
    }
}

/// Everything that can stop a query. None of these are retried; the caller
/// gets the first one hit and no matches.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The node at `position` is the wrong container for the segment there:
    /// `[]`/`[i]` on a non-array, or a field name on a scalar or array.
    #[error("cannot {} non-{expected} ({found}) at segment {position}", .expected.action())]
    TypeMismatch {
        /// Zero-based segment index.
        position: usize,
        expected: Expected,
        /// Kind of the node actually found, e.g. `"string"`.
        found: &'static str,
    },

    /// A field name was applied to null, usually a key missing one level up.
    #[error("nil data at segment {position}")]
    NilData { position: usize },

    /// The input text could not be decoded.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    pub(crate) fn mismatch(position: usize, expected: Expected, node: &Value) -> Self {
        QueryError::TypeMismatch {
            position,
            expected,
            found: kind_name(node),
        }
    }

    /// Zero-based segment index where evaluation stopped, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            QueryError::TypeMismatch { position, .. } | QueryError::NilData { position } => {
                Some(*position)
            }
            QueryError::Json(_) => None,
        }
    }
}

/// Name used in error messages for the variant of `node`.
pub(crate) fn kind_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

// Result alias used across the crate
pub type Result<T> = std::result::Result<T, QueryError>;
