//! JSON rendering of diff result trees.
//!
//! [`Diff::render`] produces the serializable summary embedded in API
//! responses. The output is deterministic for identical inputs: composite
//! children render in tree order, and JSON object keys follow
//! `serde_json`'s map ordering. Whether unchanged entries are omitted is
//! the caller's policy; `render` always includes both sides.

use serde_json::{json, Map, Value as Json};

use crate::node::{Diff, PrimitiveDiff};

impl Diff {
    /// Render the result tree as JSON.
    ///
    /// Every node carries a `"kind"` tag and, except for `"empty"`, a
    /// `"changed"` flag. Primitive leaves include both raw values; an
    /// absent side renders as `null` with an explicit absence marker, so
    /// absent stays distinguishable from a present `null`.
    pub fn render(&self) -> Json {
        match self {
            Diff::Empty(_) => json!({ "kind": "empty" }),
            Diff::Primitive(p) => render_primitive(p),
            Diff::Collection(c) => json!({
                "kind": "list",
                "changed": !self.is_same(),
                "items": c.entries.iter().map(Diff::render).collect::<Vec<_>>(),
            }),
            Diff::Record(r) => render_fields("map", !self.is_same(), &r.fields),
            Diff::Exportable(e) => render_fields("object", !self.is_same(), &e.fields),
        }
    }
}

fn render_primitive(p: &PrimitiveDiff) -> Json {
    let mut map = Map::new();
    map.insert("kind".to_string(), json!("value"));
    map.insert("changed".to_string(), json!(!p.is_same()));
    map.insert("base".to_string(), side_json(p.base()));
    map.insert("other".to_string(), side_json(p.other()));
    if p.base().is_none() {
        map.insert("base_absent".to_string(), json!(true));
    }
    if p.other().is_none() {
        map.insert("other_absent".to_string(), json!(true));
    }
    Json::Object(map)
}

fn render_fields(kind: &str, changed: bool, fields: &[(String, Diff)]) -> Json {
    let rendered: Map<String, Json> = fields
        .iter()
        .map(|(key, child)| (key.clone(), child.render()))
        .collect();
    json!({
        "kind": kind,
        "changed": changed,
        "fields": rendered,
    })
}

fn side_json(side: Option<&signboard_export::Value>) -> Json {
    // An object with a broken export contract renders as null rather than
    // failing the whole summary; diffing itself never reads values through
    // to_json, so the comparison is unaffected.
    match side {
        None => Json::Null,
        Some(value) => value.to_json().unwrap_or(Json::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::diff;
    use serde_json::json;
    use signboard_export::{Fields, Value};
    use signboard_model::User;

    fn record(pairs: &[(&str, Value)]) -> Value {
        Value::Map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<Fields>(),
        )
    }

    #[test]
    fn unchanged_primitive() {
        let rendered = diff(&Value::Int(5), &Value::Int(5), 3, false).render();
        assert_eq!(
            rendered,
            json!({ "kind": "value", "changed": false, "base": 5, "other": 5 })
        );
    }

    #[test]
    fn changed_primitive() {
        let rendered = diff(&Value::Int(5), &Value::Int(7), 3, false).render();
        assert_eq!(
            rendered,
            json!({ "kind": "value", "changed": true, "base": 5, "other": 7 })
        );
    }

    #[test]
    fn absent_side_is_marked() {
        let rendered = diff(
            &record(&[("a", Value::Int(1))]),
            &record(&[]),
            3,
            false,
        )
        .render();

        assert_eq!(
            rendered["fields"]["a"],
            json!({
                "kind": "value",
                "changed": true,
                "base": 1,
                "other": null,
                "other_absent": true
            })
        );
    }

    #[test]
    fn absent_is_distinguishable_from_null() {
        let rendered = diff(
            &record(&[("a", Value::Null)]),
            &record(&[]),
            3,
            false,
        )
        .render();

        let field = &rendered["fields"]["a"];
        assert_eq!(field["changed"], json!(true));
        assert_eq!(field["base"], json!(null));
        assert_eq!(field.get("base_absent"), None);
        assert_eq!(field["other_absent"], json!(true));
    }

    #[test]
    fn depth_exhaustion_renders_empty() {
        let rendered = diff(&Value::Int(1), &Value::Int(2), 0, false).render();
        assert_eq!(rendered, json!({ "kind": "empty" }));
    }

    #[test]
    fn list_renders_items_in_order() {
        let base = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let other = Value::List(vec![Value::Int(1), Value::Int(9)]);

        let rendered = diff(&base, &other, 3, false).render();
        assert_eq!(rendered["kind"], json!("list"));
        assert_eq!(rendered["changed"], json!(true));
        assert_eq!(rendered["items"][0]["changed"], json!(false));
        assert_eq!(rendered["items"][1]["changed"], json!(true));
    }

    #[test]
    fn exportable_renders_contract_fields_only() {
        let before = Value::object(User::new("alice", ["editor"], "h1"));
        let after = Value::object(User::new("alice", ["editor"], "h2"));

        let rendered = diff(&before, &after, 4, false).render();
        assert_eq!(rendered["kind"], json!("object"));
        assert_eq!(rendered["changed"], json!(false));
        let fields = rendered["fields"].as_object().unwrap();
        assert!(fields.contains_key("user"));
        assert!(fields.contains_key("groups"));
        assert!(!fields.contains_key("hash"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let base = record(&[("b", Value::Int(1)), ("a", Value::Int(2))]);
        let other = record(&[("a", Value::Int(3)), ("c", Value::Int(4))]);

        let first = diff(&base, &other, 4, false).render();
        let second = diff(&base, &other, 4, false).render();
        assert_eq!(first, second);
    }
}
