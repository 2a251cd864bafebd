use serde::{Deserialize, Serialize};

use crate::model::item::{ItemId, ListItem};

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
}

impl Todo {
    /// Create a todo from raw input. Trims the text; blank input yields `None`.
    pub fn new(id: ItemId, text: &str) -> Option<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Todo {
            id,
            text: text.to_string(),
            done: false,
        })
    }
}

impl ListItem for Todo {
    type Fields = String;

    const STORE_KEY: &'static str = "todos";

    fn id(&self) -> ItemId {
        self.id
    }

    fn create(id: ItemId, fields: &String) -> Option<Todo> {
        Todo::new(id, fields)
    }

    fn with_fields(&self, fields: &String) -> Option<Todo> {
        let text = fields.trim();
        if text.is_empty() {
            return None;
        }
        Some(Todo {
            text: text.to_string(),
            ..self.clone()
        })
    }

    fn fields(&self) -> String {
        self.text.clone()
    }
}
