//! Diff engine for the signboard exportable model.
//!
//! Computes bounded-depth structural diffs between two [`Value`]s, producing
//! an immutable result tree that the API layer renders into responses (for
//! example, to show what changed when an admin edits a display
//! configuration).
//!
//! The computation is pure and synchronous: no I/O, no shared mutable
//! state. Concurrent callers need no coordination.
//!
//! # Key Types
//!
//! - [`diff`] — The dispatcher: compare two values to a maximum depth
//! - [`Diff`] — The result tree, one variant per value kind
//! - [`Diff::render`] — Deterministic JSON summary of a result tree
//!
//! [`Value`]: signboard_export::Value

pub mod engine;
pub mod node;
pub mod render;

pub use engine::diff;
pub use node::{CollectionDiff, Diff, EmptyDiff, ExportableDiff, PrimitiveDiff, RecordDiff};
