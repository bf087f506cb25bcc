//! Error types for the export crate.

use thiserror::Error;

/// Errors produced when serializing an exportable object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// A key declared by the export contract yielded no value.
    #[error("export contract declares key {key:?} but the accessor returned nothing")]
    MissingField { key: String },
}
