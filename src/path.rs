use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde_json::Value;

use crate::context::QueryOptions;
use crate::errors::Result;

const EACH: &str = "[]";
const INDEXED: &str = "[i]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(String), // foo
    Each,          // []
    Indexed,       // [i]
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw {
            EACH => Segment::Each,
            INDEXED => Segment::Indexed,
            name => Segment::Field(name.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Each => f.write_str(EACH),
            Segment::Indexed => f.write_str(INDEXED),
        }
    }
}

/// A dot-delimited path such as `data.[].meals.[].time`.
///
/// Segments are split on `.` with no escaping, so a field name containing a
/// dot cannot be addressed. `[]` and `[i]` are only recognised as whole
/// segments; anything else is a literal key, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn parse(input: &str) -> Self {
        Path {
            segments: input.split('.').map(Segment::parse).collect(),
        }
    }

    /// Evaluate this path against `data`; see [`crate::evaluate`].
    pub fn query<'a>(&self, data: &'a Value, opts: &QueryOptions) -> Result<Vec<&'a Value>> {
        crate::engine::eval_path(data, self, opts)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.iter().join("."))
    }
}
