//! Dot-delimited path queries over decoded JSON, in the spirit of a very
//! small subset of `jq`.
//!
//! A path is split on `.` into segments: a field name selects a key in an
//! object, `[]` visits every element of an array, and `[i]` visits only the
//! element chosen by [`QueryOptions::index`].
//!
//! ```
//! use json_dot_query::{evaluate, QueryOptions};
//! use serde_json::json;
//!
//! let data = json!({"data": [{"n": 1}, {"n": 2}]});
//! let all = evaluate("data.[].n", &data, None).unwrap();
//! assert_eq!(all, vec![&json!(1), &json!(2)]);
//!
//! let opts = QueryOptions::new().with_index(1);
//! let one = evaluate("data.[i].n", &data, Some(&opts)).unwrap();
//! assert_eq!(one, vec![&json!(2)]);
//! ```
pub mod context;
pub mod engine;
pub mod errors;
pub mod path;

use serde_json::Value;

pub use context::QueryOptions;
pub use engine::{first, from_json, or_default, unique};
pub use errors::{Expected, QueryError, Result};
pub use path::{Path, Segment};

/// Evaluate `path` against `data`.
///
/// Matches borrow from `data` and come back in document order. On error no
/// partial results are returned.
pub fn evaluate<'a>(
    path: &str,
    data: &'a Value,
    options: Option<&QueryOptions>,
) -> Result<Vec<&'a Value>> {
    let opts = options.copied().unwrap_or_default();
    engine::eval_path(data, &Path::parse(path), &opts)
}

/// Holds options so repeated queries share one configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: QueryOptions,
}

impl Evaluator {
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn eval<'a>(&self, path: &str, data: &'a Value) -> Result<Vec<&'a Value>> {
        evaluate(path, data, Some(&self.options))
    }
}
