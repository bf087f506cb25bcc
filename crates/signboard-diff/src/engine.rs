//! The dispatcher: compare two values, bounded by depth.
//!
//! Dispatch looks at the *base* value's kind only. When the other side has
//! an incompatible shape, its accessors simply report every key or index
//! as absent; a shape mismatch is never an error.

use signboard_export::{Exportable, Fields, Value};
use tracing::trace;

use crate::node::{
    CollectionDiff, Diff, EmptyDiff, ExportableDiff, PrimitiveDiff, RecordDiff,
};

/// Compute the diff between `base` and `other`, recursing at most `depth`
/// levels.
///
/// At `depth == 0` the result is [`Diff::Empty`] regardless of the value
/// kinds. The `private` flag selects the exportable contract view and is
/// stored verbatim on every node this call constructs. (`depth` is
/// unsigned, so the negative-depth case is unrepresentable.)
pub fn diff(base: &Value, other: &Value, depth: usize, private: bool) -> Diff {
    diff_entry(Some(base), Some(other), depth, private)
}

/// Diff one entry of a composite, where either side may be absent.
///
/// An absent base dispatches like a scalar: the result is a
/// [`PrimitiveDiff`] recording the absence.
pub(crate) fn diff_entry(
    base: Option<&Value>,
    other: Option<&Value>,
    depth: usize,
    private: bool,
) -> Diff {
    if depth == 0 {
        return Diff::Empty(EmptyDiff::new(private));
    }

    match base {
        Some(Value::Object(obj)) => {
            trace!(depth, "dispatch: exportable");
            Diff::Exportable(exportable_diff(obj.as_ref(), other, depth, private))
        }
        Some(Value::Map(fields)) => {
            trace!(depth, "dispatch: record");
            Diff::Record(record_diff(fields, other, depth, private))
        }
        Some(Value::List(items)) => {
            trace!(depth, "dispatch: collection");
            Diff::Collection(collection_diff(items, other, depth, private))
        }
        _ => Diff::Primitive(PrimitiveDiff::new(base.cloned(), other.cloned(), private)),
    }
}

/// Union of two key sequences: base keys first, in their original order,
/// then keys present only in `other`, in `other`'s order. No duplicates.
pub(crate) fn key_union<'a>(
    base: impl IntoIterator<Item = &'a str>,
    other: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut union: Vec<String> = base.into_iter().map(str::to_string).collect();
    for key in other {
        if !union.iter().any(|k| k == key) {
            union.push(key.to_string());
        }
    }
    union
}

fn record_diff(base: &Fields, other: Option<&Value>, depth: usize, private: bool) -> RecordDiff {
    let other_keys = other
        .and_then(Value::as_map)
        .map(|fields| fields.keys().collect::<Vec<_>>())
        .unwrap_or_default();
    let keys = key_union(base.keys(), other_keys);

    let fields = keys
        .into_iter()
        .map(|key| {
            let child = diff_entry(
                base.get(&key),
                other.and_then(|o| o.field(&key)),
                depth - 1,
                private,
            );
            (key, child)
        })
        .collect();

    RecordDiff { fields, private }
}

fn collection_diff(
    base: &[Value],
    other: Option<&Value>,
    depth: usize,
    private: bool,
) -> CollectionDiff {
    let other_len = other.and_then(Value::as_list).map_or(0, <[Value]>::len);
    let len = base.len().max(other_len);

    let entries = (0..len)
        .map(|idx| {
            diff_entry(
                base.get(idx),
                other.and_then(|o| o.index(idx)),
                depth - 1,
                private,
            )
        })
        .collect();

    CollectionDiff { entries, private }
}

fn exportable_diff(
    base: &dyn Exportable,
    other: Option<&Value>,
    depth: usize,
    private: bool,
) -> ExportableDiff {
    let other_obj = other.and_then(Value::as_object);

    let fields = base
        .export_keys(private)
        .into_iter()
        .map(|key| {
            let base_val = base.export_field(key);
            let other_val = other_obj.and_then(|o| o.export_field(key));
            let child = diff_entry(base_val.as_ref(), other_val.as_ref(), depth - 1, private);
            (key.to_string(), child)
        })
        .collect();

    ExportableDiff { fields, private }
}
