use serde::{Deserialize, Serialize};
use std::fmt;

/// The three categories quick capture can file free text under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// An actionable item. Some older call sites name this `todoList`.
    #[serde(alias = "todoList")]
    Task,
    List,
    Note,
}

impl ContentType {
    /// The closed set of categories, in precedence-agnostic order.
    pub const ALL: [ContentType; 3] = [Self::Task, Self::List, Self::Note];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::List => "list",
            Self::Note => "note",
        }
    }

    /// Parse a category keyword, including the legacy `todoList` spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "task" | "todo" | "todolist" => Some(Self::Task),
            "list" => Some(Self::List),
            "note" => Some(Self::Note),
            _ => None,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Note
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
