//! Dot-separated key-path traversal over value trees.
//!
//! A path like `"a.b.c"` is a sequence of nested lookups. Each segment is a
//! map lookup on an object, a base-10 index on an array, and absent on any
//! other variant. A `null` intermediate is therefore treated as absent on
//! the next access rather than as a distinct dereference error.

use serde_json::Value;

/// Outcome of resolving a key path against a value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PathLookup<'a> {
    /// Every segment resolved; this is the value at the end of the path.
    Found(&'a Value),
    /// Resolution stopped at `segment` (0-indexed `depth` within the path).
    Missing { segment: String, depth: usize },
}

impl PathLookup<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathLookup::Found(_))
    }
}

/// Resolve `key_path` against `obj`, one segment at a time.
pub fn resolve<'a>(key_path: &str, obj: &'a Value) -> PathLookup<'a> {
    let mut chain = obj;
    for (depth, segment) in key_path.split('.').enumerate() {
        match step(chain, segment) {
            Some(next) => chain = next,
            None => {
                return PathLookup::Missing {
                    segment: segment.to_string(),
                    depth,
                }
            }
        }
    }
    PathLookup::Found(chain)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
