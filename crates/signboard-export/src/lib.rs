//! Exportable data model for signboard.
//!
//! This crate provides the value representation and serialization contract
//! shared by the rest of the workspace. Domain objects declare which of
//! their fields are visible through the [`Exportable`] trait; the same
//! contract drives both JSON export and structural diffing.
//!
//! # Key Types
//!
//! - [`Value`] — Closed union over the value kinds the model can carry
//! - [`Fields`] — Insertion-ordered string-keyed map of values
//! - [`Exportable`] — Capability trait for domain objects with an export contract
//! - [`export`] — Serialize an exportable object to JSON over its contract

pub mod error;
pub mod exportable;
pub mod fields;
pub mod value;

pub use error::ExportError;
pub use exportable::{export, Exportable};
pub use fields::Fields;
pub use value::Value;
