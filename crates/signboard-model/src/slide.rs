//! Display slides.

use serde::{Deserialize, Serialize};

use signboard_export::{Exportable, Value};

const KEYS: &[&str] = &[
    "id",
    "name",
    "index",
    "duration_ms",
    "markup",
    "owner",
    "enabled",
];

/// A single slide shown on a signage display.
///
/// All slide fields are part of the public contract; there is no private
/// extension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Opaque slide identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Position within its queue.
    pub index: i64,
    /// How long the slide stays on screen, in milliseconds.
    pub duration_ms: i64,
    /// The slide markup source.
    pub markup: String,
    /// Login name of the owning user.
    pub owner: String,
    /// Whether the slide is currently shown.
    pub enabled: bool,
}

impl Slide {
    /// Create a slide with default scheduling (first position, 5 s, enabled).
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            index: 0,
            duration_ms: 5000,
            markup: String::new(),
            owner: owner.into(),
            enabled: true,
        }
    }
}

impl Exportable for Slide {
    fn export_keys(&self, _private: bool) -> Vec<&'static str> {
        KEYS.to_vec()
    }

    fn export_field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "index" => Some(self.index.into()),
            "duration_ms" => Some(self.duration_ms.into()),
            "markup" => Some(self.markup.as_str().into()),
            "owner" => Some(self.owner.as_str().into()),
            "enabled" => Some(self.enabled.into()),
            _ => None,
        }
    }
}
