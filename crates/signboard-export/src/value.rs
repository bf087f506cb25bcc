//! The closed value union carried by the exportable model.
//!
//! Everything the signage model can hold fits one of four shapes: a scalar,
//! an ordered list, a keyed record, or a domain object with its own export
//! contract. Consumers (the diff engine in particular) match on the variant
//! instead of inspecting runtime types.

use std::sync::Arc;

use crate::error::ExportError;
use crate::exportable::{export, Exportable};
use crate::fields::Fields;

/// A value in the exportable model.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null scalar.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Ordered collection of values.
    List(Vec<Value>),
    /// Structured record with insertion-ordered keys.
    Map(Fields),
    /// A domain object implementing the export contract. Shared read-only.
    Object(Arc<dyn Exportable>),
}

impl Value {
    /// Wrap a domain object as a value.
    pub fn object<T: Exportable + 'static>(obj: T) -> Self {
        Value::Object(Arc::new(obj))
    }

    /// Returns `true` for the scalar kinds (null, bool, int, float, string).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_) | Value::Object(_))
    }

    /// The list contents, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The record fields, if this is a map.
    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// The domain object, if this is an exportable.
    pub fn as_object(&self) -> Option<&Arc<dyn Exportable>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Element at `idx`, or `None` if out of range or not a list.
    ///
    /// Non-list values hold no indices. This is the accessor the diff
    /// engine leans on when the two sides disagree about shape: the
    /// mismatched side simply contributes nothing.
    pub fn index(&self, idx: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(idx))
    }

    /// Field named `key`, or `None` if missing or not a map.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|fields| fields.get(key))
    }

    /// Build a value from parsed JSON.
    ///
    /// Numbers become [`Value::Int`] when they fit `i64`, otherwise
    /// [`Value::Float`]. JSON objects become [`Value::Map`]; there is no
    /// JSON representation for [`Value::Object`].
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Render the value as JSON.
    ///
    /// Domain objects are serialized through their *public* export
    /// contract; use [`export`] directly for a privileged view.
    pub fn to_json(&self) -> Result<serde_json::Value, ExportError> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::Map(fields) => {
                let mut map = serde_json::Map::new();
                for (k, v) in fields.iter() {
                    map.insert(k.to_string(), v.to_json()?);
                }
                serde_json::Value::Object(map)
            }
            Value::Object(obj) => export(obj.as_ref(), false)?,
        })
    }
}

/// Scalars compare by value, lists and maps structurally, and objects by
/// pointer identity. Two distinct object instances are never value-equal;
/// comparing their contents is the diff engine's job.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Map(fields)
    }
}
