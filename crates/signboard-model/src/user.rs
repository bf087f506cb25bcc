//! User accounts.

use serde::{Deserialize, Serialize};

use signboard_export::{Exportable, Value};

/// Keys visible to ordinary API consumers.
const PUBLIC_KEYS: &[&str] = &["user", "groups"];
/// Keys visible to privileged callers. Superset of [`PUBLIC_KEYS`].
const PRIVATE_KEYS: &[&str] = &["user", "groups", "hash"];

/// A user account.
///
/// The password hash is part of the private contract only; it never appears
/// in public exports or non-private diffs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login name. Unique within the service.
    pub user: String,
    /// Access groups the account belongs to.
    pub groups: Vec<String>,
    /// Password hash. Restricted.
    pub hash: String,
}

impl User {
    /// Create a user account.
    pub fn new(
        user: impl Into<String>,
        groups: impl IntoIterator<Item = impl Into<String>>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            groups: groups.into_iter().map(Into::into).collect(),
            hash: hash.into(),
        }
    }

    /// Returns `true` if the account belongs to `group`.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

impl Exportable for User {
    fn export_keys(&self, private: bool) -> Vec<&'static str> {
        if private {
            PRIVATE_KEYS.to_vec()
        } else {
            PUBLIC_KEYS.to_vec()
        }
    }

    fn export_field(&self, key: &str) -> Option<Value> {
        match key {
            "user" => Some(self.user.as_str().into()),
            "groups" => Some(Value::List(
                self.groups.iter().map(|g| g.as_str().into()).collect(),
            )),
            "hash" => Some(self.hash.as_str().into()),
            _ => None,
        }
    }
}
