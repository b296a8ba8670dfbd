use std::fmt;

use serde::{Deserialize, Serialize};

/// Something that can be shown as one entry of a rendered list.
pub trait ListItem {
    /// Stable identity used to key the rendered entry
    fn item_key(&self) -> String;

    /// Display text of the entry
    fn label(&self) -> String;
}

/// Record identifier as issued by the API: any JSON number or an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl RecordId {
    /// Key that never collides between a number and a string spelled the same
    pub fn key(&self) -> String {
        match self {
            Self::Number(n) => format!("n:{n}"),
            Self::Text(s) => format!("s:{s}"),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of the `/lecture-materials` collection.
/// Fields beyond `id` and `title` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LectureMaterial {
    pub id: RecordId,
    pub title: String,
}

impl ListItem for LectureMaterial {
    fn item_key(&self) -> String {
        self.id.key()
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
