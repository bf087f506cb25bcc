//! Slide queues.

use serde::{Deserialize, Serialize};

use signboard_export::{Exportable, Value};

const KEYS: &[&str] = &["name", "owner", "slides"];

/// A named, owned sequence of slides assigned to a display.
///
/// The `slides` field exports as a list of exportable objects, so diffing
/// a queue recurses into each slide's own contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    /// Queue name. Unique within the service.
    pub name: String,
    /// Login name of the owning user.
    pub owner: String,
    /// The slides, in display order.
    pub slides: Vec<crate::Slide>,
}

impl Queue {
    /// Create an empty queue.
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            slides: Vec::new(),
        }
    }

    /// Append a slide to the end of the queue.
    pub fn push(&mut self, slide: crate::Slide) {
        self.slides.push(slide);
    }
}

impl Exportable for Queue {
    fn export_keys(&self, _private: bool) -> Vec<&'static str> {
        KEYS.to_vec()
    }

    fn export_field(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "owner" => Some(self.owner.as_str().into()),
            "slides" => Some(Value::List(
                self.slides
                    .iter()
                    .map(|s| Value::object(s.clone()))
                    .collect(),
            )),
            _ => None,
        }
    }
}
