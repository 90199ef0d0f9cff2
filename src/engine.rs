use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, trace};

use crate::context::QueryOptions;
use crate::errors::{kind_name, Expected, QueryError, Result};
use crate::path::{Path, Segment};

/// Stand-in for keys missing from a mapping.
static NULL: Value = Value::Null;

/// Walk `path` over `data`, collecting every match in document order.
///
/// The first failure aborts the whole walk; matches gathered before it are
/// dropped.
pub fn eval_path<'a>(data: &'a Value, path: &Path, opts: &QueryOptions) -> Result<Vec<&'a Value>> {
    debug!(%path, index = ?opts.index, "evaluating path");
    let mut out = Vec::new();
    if let Err(err) = eval_segments(data, &path.segments, 0, opts, &mut out) {
        debug!(%path, error = %err, "query failed");
        return Err(err);
    }
    Ok(out)
}

/// Resolve `segments[pos..]` against `node`, appending matches to `out`.
fn eval_segments<'a>(
    node: &'a Value,
    segments: &[Segment],
    pos: usize,
    opts: &QueryOptions,
    out: &mut Vec<&'a Value>,
) -> Result<()> {
    // Nothing left to resolve: the node itself is the match.
    let Some(segment) = segments.get(pos) else {
        out.push(node);
        return Ok(());
    };
    trace!(position = pos, %segment, node = kind_name(node), "step");

    match segment {
        Segment::Each | Segment::Indexed => {
            let Value::Array(items) = node else {
                return Err(QueryError::mismatch(pos, Expected::Sequence, node));
            };
            let only = match segment {
                Segment::Indexed => opts.index,
                _ => None,
            };
            for (i, item) in items.iter().enumerate() {
                if only.is_some_and(|k| k != i) {
                    continue;
                }
                eval_segments(item, segments, pos + 1, opts, out)?;
            }
            Ok(())
        }
        Segment::Field(name) => {
            let child = match node {
                Value::Object(map) => map.get(name).unwrap_or(&NULL),
                Value::Null => return Err(QueryError::NilData { position: pos }),
                other => return Err(QueryError::mismatch(pos, Expected::Mapping, other)),
            };
            eval_segments(child, segments, pos + 1, opts, out)
        }
    }
}

/// Decode `json_str` and evaluate `path` against it, returning owned matches.
pub fn from_json(json_str: &str, path: &str, opts: &QueryOptions) -> Result<Vec<Value>> {
    let data: Value = serde_json::from_str(json_str)?;
    let found = eval_path(&data, &Path::parse(path), opts)?;
    Ok(found.into_iter().cloned().collect())
}

/// First match, or null when there is none.
pub fn first(results: &[Value]) -> Value {
    results.first().cloned().unwrap_or(Value::Null)
}

/// Drop repeated matches, keeping the first occurrence of each.
pub fn unique(results: Vec<Value>) -> Vec<Value> {
    results
        .into_iter()
        .unique_by(|v| serde_json::to_string(v).unwrap_or_default())
        .collect()
}

/// Replace a result with no real match with `default_json`, which is parsed
/// as JSON if possible and otherwise taken as a plain string.
///
/// Missing keys resolve to null, so a result made only of nulls counts as no
/// match, same as an empty one.
pub fn or_default(results: Vec<Value>, default_json: &str) -> Vec<Value> {
    if results.iter().any(|v| !v.is_null()) {
        return results;
    }
    let fallback = serde_json::from_str::<Value>(default_json)
        .unwrap_or_else(|_| Value::String(default_json.to_string()));
    vec![fallback]
}
