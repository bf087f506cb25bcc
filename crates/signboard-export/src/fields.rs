//! Insertion-ordered field map.
//!
//! `Fields` keeps keys in first-insert order, which is what the diff engine
//! relies on when it takes the union of two records: base keys keep their
//! original order and other-only keys are appended after them. A sorted map
//! would silently reorder the output, so the ordering is explicit here.

use crate::value::Value;

/// A string-keyed map of [`Value`]s that preserves insertion order.
///
/// Lookup is linear; records in the signage model are small (tens of keys),
/// so the simple representation wins over a hashed index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a field. A key that already exists is overwritten in place
    /// and keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut fields = Fields::new();
        fields.insert("zebra", 1i64);
        fields.insert("apple", 2i64);
        fields.insert("mango", 3i64);

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut fields = Fields::new();
        fields.insert("a", 1i64);
        fields.insert("b", 2i64);
        fields.insert("a", 10i64);

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(fields.get("a"), Some(&Value::Int(10)));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn get_missing_key() {
        let fields = Fields::new();
        assert_eq!(fields.get("nope"), None);
        assert!(!fields.contains_key("nope"));
    }

    #[test]
    fn from_iterator_deduplicates() {
        let fields: Fields = vec![
            ("x".to_string(), Value::Int(1)),
            ("y".to_string(), Value::Int(2)),
            ("x".to_string(), Value::Int(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("x"), Some(&Value::Int(3)));
    }
}
