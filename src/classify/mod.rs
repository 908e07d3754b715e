pub mod dates;
pub mod items;
pub(crate) mod signals;
pub mod vocab;

pub use dates::{extract_due_date, extract_due_date_from};
pub use items::extract_list_items;

use crate::core::content_type::ContentType;
use crate::core::due_date::DueDate;
use chrono::NaiveDate;
use signals::Signals;
use vocab::Vocabulary;

/// Decide which category free text most resembles. Total over any input:
/// empty, whitespace-only, and single-word text are `Note` by contract.
pub fn detect_type(text: &str) -> ContentType {
    Signals::scan(text, Vocabulary::global()).detect()
}

/// How strongly `text` supports `candidate`, in [0.0, 1.0]. Queried per
/// category; the scores across categories are not a distribution.
pub fn confidence(text: &str, candidate: ContentType) -> f32 {
    Signals::scan(text, Vocabulary::global()).confidence(candidate)
}

/// The classification operations bound to one vocabulary, so applications
/// can extend the keyword tables without touching the free functions.
#[derive(Debug, Clone, Default)]
pub struct ContentClassifier {
    vocab: Vocabulary,
}

impl ContentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn detect_type(&self, text: &str) -> ContentType {
        Signals::scan(text, &self.vocab).detect()
    }

    pub fn confidence(&self, text: &str, candidate: ContentType) -> f32 {
        Signals::scan(text, &self.vocab).confidence(candidate)
    }

    pub fn extract_due_date(&self, text: &str) -> Option<DueDate> {
        dates::extract_due_date(text)
    }

    pub fn extract_due_date_from(&self, text: &str, today: NaiveDate) -> Option<DueDate> {
        dates::extract_due_date_from(text, today)
    }

    pub fn extract_list_items(&self, text: &str) -> Vec<String> {
        items::extract_with(text, &self.vocab)
    }

    pub(crate) fn signals(&self, text: &str) -> Signals {
        Signals::scan(text, &self.vocab)
    }
}
