//! The diff result tree.
//!
//! One [`diff`] invocation produces one [`Diff`], with children nested per
//! collection entry or record field. The tree is immutable once built:
//! every node carries the `private` flag it was constructed with, and
//! [`Diff::is_same`] folds the whole tree into a single changed/unchanged
//! answer.
//!
//! [`diff`]: crate::engine::diff

use signboard_export::Value;

/// The result of comparing two values.
///
/// Which variant is produced depends on the *base* value's kind (and on
/// the depth bound, which forces [`Diff::Empty`] when exhausted).
#[derive(Clone, Debug, PartialEq)]
pub enum Diff {
    /// Depth bound reached; no comparison was performed.
    Empty(EmptyDiff),
    /// Two scalar values compared directly.
    Primitive(PrimitiveDiff),
    /// An ordered collection, one child per index.
    Collection(CollectionDiff),
    /// A structured record, one child per key in the union.
    Record(RecordDiff),
    /// An exportable domain object, one child per contract key.
    Exportable(ExportableDiff),
}

impl Diff {
    /// The visibility flag this node was constructed with.
    pub fn private(&self) -> bool {
        match self {
            Diff::Empty(d) => d.private,
            Diff::Primitive(d) => d.private,
            Diff::Collection(d) => d.private,
            Diff::Record(d) => d.private,
            Diff::Exportable(d) => d.private,
        }
    }

    /// Returns `true` if no difference was found.
    ///
    /// An [`Diff::Empty`] node reports `true`: the depth bound means "no
    /// opinion", which is not evidence of a difference.
    pub fn is_same(&self) -> bool {
        match self {
            Diff::Empty(_) => true,
            Diff::Primitive(d) => d.is_same(),
            Diff::Collection(d) => d.entries.iter().all(Diff::is_same),
            Diff::Record(d) => d.fields.iter().all(|(_, child)| child.is_same()),
            Diff::Exportable(d) => d.fields.iter().all(|(_, child)| child.is_same()),
        }
    }
}

/// Sentinel produced when the recursion bound is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyDiff {
    pub(crate) private: bool,
}

impl EmptyDiff {
    pub(crate) fn new(private: bool) -> Self {
        Self { private }
    }
}

/// Leaf comparing two scalar values.
///
/// `None` on either side means the value was absent there (a key present
/// on only one side of a record, an index past the end of the shorter
/// list). Absence is an ordinary comparable state: absent equals absent.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveDiff {
    pub(crate) base: Option<Value>,
    pub(crate) other: Option<Value>,
    pub(crate) private: bool,
}

impl PrimitiveDiff {
    pub(crate) fn new(base: Option<Value>, other: Option<Value>, private: bool) -> Self {
        Self {
            base,
            other,
            private,
        }
    }

    /// The base-side value, if present.
    pub fn base(&self) -> Option<&Value> {
        self.base.as_ref()
    }

    /// The other-side value, if present.
    pub fn other(&self) -> Option<&Value> {
        self.other.as_ref()
    }

    /// Value equality, with absent == absent.
    pub fn is_same(&self) -> bool {
        self.base == self.other
    }
}

/// Composite over an ordered collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionDiff {
    pub(crate) entries: Vec<Diff>,
    pub(crate) private: bool,
}

impl CollectionDiff {
    /// Per-index children, covering the union of both index ranges.
    pub fn entries(&self) -> &[Diff] {
        &self.entries
    }
}

/// Composite over a structured record.
///
/// Field order is the key union: base keys first in their original order,
/// then other-only keys appended.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDiff {
    pub(crate) fields: Vec<(String, Diff)>,
    pub(crate) private: bool,
}

impl RecordDiff {
    /// Per-key children in union order.
    pub fn fields(&self) -> &[(String, Diff)] {
        &self.fields
    }
}

/// Composite over an exportable domain object.
///
/// Children are restricted to the base object's contract keys for the
/// visibility the diff was computed with; nothing outside the contract is
/// ever compared.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportableDiff {
    pub(crate) fields: Vec<(String, Diff)>,
    pub(crate) private: bool,
}

impl ExportableDiff {
    /// Per-key children in contract order.
    pub fn fields(&self) -> &[(String, Diff)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_opinion() {
        let diff = Diff::Empty(EmptyDiff::new(false));
        assert!(diff.is_same());
    }

    #[test]
    fn primitive_same_and_changed() {
        let same = PrimitiveDiff::new(Some(Value::Int(5)), Some(Value::Int(5)), false);
        assert!(same.is_same());

        let changed = PrimitiveDiff::new(Some(Value::Int(5)), Some(Value::Int(7)), false);
        assert!(!changed.is_same());
    }

    #[test]
    fn absent_equals_absent() {
        let both_absent = PrimitiveDiff::new(None, None, false);
        assert!(both_absent.is_same());

        let one_absent = PrimitiveDiff::new(Some(Value::Int(1)), None, false);
        assert!(!one_absent.is_same());
    }

    #[test]
    fn composite_same_iff_all_children_same() {
        let same_child = Diff::Primitive(PrimitiveDiff::new(
            Some(Value::Int(1)),
            Some(Value::Int(1)),
            false,
        ));
        let changed_child = Diff::Primitive(PrimitiveDiff::new(
            Some(Value::Int(1)),
            Some(Value::Int(2)),
            false,
        ));

        let all_same = Diff::Collection(CollectionDiff {
            entries: vec![same_child.clone(), same_child.clone()],
            private: false,
        });
        assert!(all_same.is_same());

        let mixed = Diff::Collection(CollectionDiff {
            entries: vec![same_child, changed_child],
            private: false,
        });
        assert!(!mixed.is_same());
    }

    #[test]
    fn private_flag_is_readable_on_every_variant() {
        let nodes = [
            Diff::Empty(EmptyDiff::new(true)),
            Diff::Primitive(PrimitiveDiff::new(None, None, true)),
            Diff::Collection(CollectionDiff {
                entries: vec![],
                private: true,
            }),
            Diff::Record(RecordDiff {
                fields: vec![],
                private: true,
            }),
            Diff::Exportable(ExportableDiff {
                fields: vec![],
                private: true,
            }),
        ];
        assert!(nodes.iter().all(Diff::private));
    }
}
