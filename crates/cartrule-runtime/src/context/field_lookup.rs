//! Field Lookup Utilities
//!
//! Resolves dot-notation paths against a record, broadcasting the remaining
//! path across every element of any array met along the way.

use cartrule_core::Value;

/// One candidate slot produced by path resolution.
///
/// `None` marks an array element that lacked the requested member. Such
/// slots are kept so positions line up with the source array.
pub type Candidate<'a> = Option<&'a Value>;

/// Running state while folding over path segments
enum Cursor<'a> {
    /// Nothing found at this point of the path
    Absent,
    /// A single value reached by plain member access
    Single(&'a Value),
    /// Values reached by broadcasting over an array
    Many(Vec<Candidate<'a>>),
}

impl<'a> Cursor<'a> {
    fn step(self, segment: &str) -> Cursor<'a> {
        match self {
            Cursor::Absent => Cursor::Many(Vec::new()),
            Cursor::Single(value) if !value.is_truthy() => Cursor::Many(Vec::new()),
            Cursor::Single(Value::Array(items)) => {
                Cursor::Many(items.iter().map(|item| item.member(segment)).collect())
            }
            Cursor::Single(value) => match value.member(segment) {
                Some(next) => Cursor::Single(next),
                None => Cursor::Absent,
            },
            Cursor::Many(slots) => Cursor::Many(
                slots
                    .into_iter()
                    .map(|slot| slot.and_then(|value| value.member(segment)))
                    .collect(),
            ),
        }
    }

    fn into_candidates(self) -> Vec<Candidate<'a>> {
        match self {
            Cursor::Absent => Vec::new(),
            Cursor::Single(Value::Array(items)) => items.iter().map(Some).collect(),
            Cursor::Single(value) => vec![Some(value)],
            Cursor::Many(slots) => slots,
        }
    }
}

/// Resolve a dotted field path against a record.
///
/// - a missing path yields no candidates
/// - a scalar or object yields one candidate
/// - an array yields its elements, without flattening nested arrays
/// - an array met mid-path maps the rest of the path over each element
///
/// Traversal stops with no candidates as soon as an intermediate value is
/// falsy (`null`, `false`, `0`, `""`).
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Vec<Candidate<'a>> {
    let cursor = path
        .split('.')
        .fold(Cursor::Single(record), |cursor, segment| cursor.step(segment));

    let candidates = cursor.into_candidates();
    if candidates.is_empty() {
        tracing::debug!("Field path '{}' resolved to no candidates", path);
    }
    candidates
}
