//! The export contract for domain objects.

use std::fmt;

use crate::error::ExportError;
use crate::value::Value;

/// Capability trait for domain objects that expose fields for export.
///
/// The contract has two views: the public key set, shown to ordinary API
/// consumers, and the private key set, a superset visible to privileged
/// internal callers. Both serialization and diffing go through this trait,
/// so a field outside the contract can never leak into either.
///
/// Implementations must be safe for concurrent read-only use; values are
/// shared between simultaneous diff invocations.
pub trait Exportable: fmt::Debug + Send + Sync {
    /// The keys exposed by this object's contract.
    ///
    /// With `private = false` this is the public view; with `private = true`
    /// it may include additional restricted keys. The private set must be a
    /// superset of the public one.
    fn export_keys(&self, private: bool) -> Vec<&'static str>;

    /// The value of a contract key, or `None` if the key is not part of
    /// the contract.
    fn export_field(&self, key: &str) -> Option<Value>;
}

/// Serialize an exportable object to a JSON object over its contract keys.
///
/// Unlike diffing, where a missing field is an ordinary comparable state,
/// export promises every declared key: a contract key whose accessor yields
/// nothing is an [`ExportError::MissingField`].
pub fn export(obj: &dyn Exportable, private: bool) -> Result<serde_json::Value, ExportError> {
    let mut map = serde_json::Map::new();
    for key in obj.export_keys(private) {
        let value = obj
            .export_field(key)
            .ok_or_else(|| ExportError::MissingField {
                key: key.to_string(),
            })?;
        map.insert(key.to_string(), value.to_json()?);
    }
    Ok(serde_json::Value::Object(map))
}
