use serde::{Deserialize, Serialize};

use super::content_type::ContentType;
use super::due_date::DueDate;

/// A pre-filled capture suggestion for one piece of free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSuggestion {
    /// Category the text most resembles.
    pub content_type: ContentType,
    /// Confidence in that category, 0.0 to 1.0.
    pub confidence: f32,
    /// Whether the caller may apply the suggestion without confirmation.
    pub auto_apply: bool,
    /// Due date pre-fill; only populated for tasks.
    pub due_date: Option<DueDate>,
    /// List item pre-fill in original line order; only populated for lists.
    pub items: Vec<String>,
}
