use chrono::{Local, NaiveDate};

use crate::classify::vocab::Vocabulary;
use crate::classify::{ContentClassifier, extract_due_date_from};
use crate::config::CaptureConfig;
use crate::core::content_type::ContentType;
use crate::core::suggestion::CaptureSuggestion;

/// The quick-capture entry point: classifies raw input and packages
/// everything the capture form needs to pre-fill itself.
#[derive(Debug, Clone)]
pub struct QuickCapture {
    config: CaptureConfig,
    classifier: ContentClassifier,
}

impl QuickCapture {
    pub fn new(config: CaptureConfig) -> Self {
        let vocab =
            Vocabulary::with_extras(&config.extra_action_verbs, &config.extra_list_headers);
        Self {
            config,
            classifier: ContentClassifier::with_vocabulary(vocab),
        }
    }

    pub fn classifier(&self) -> &ContentClassifier {
        &self.classifier
    }

    /// Suggest a category (and pre-fill data) for raw capture input.
    pub fn suggest(&self, text: &str) -> CaptureSuggestion {
        self.suggest_on(text, Local::now().date_naive())
    }

    /// [`QuickCapture::suggest`] with an explicit reference date.
    pub fn suggest_on(&self, text: &str, today: NaiveDate) -> CaptureSuggestion {
        let signals = self.classifier.signals(text);
        let content_type = signals.detect();
        let confidence = signals.confidence(content_type);
        let auto_apply = confidence > self.config.auto_apply_threshold;

        let due_date = match content_type {
            ContentType::Task => extract_due_date_from(text, today),
            _ => None,
        };
        let items = match content_type {
            ContentType::List => self.classifier.extract_list_items(text),
            _ => Vec::new(),
        };

        log::debug!(
            "Capture suggestion: {} (confidence {:.2}, auto-apply {})",
            content_type,
            confidence,
            auto_apply
        );

        CaptureSuggestion {
            content_type,
            confidence,
            auto_apply,
            due_date,
            items,
        }
    }
}

impl Default for QuickCapture {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}

/// One-off suggestion with the default configuration.
pub fn suggest(text: &str) -> CaptureSuggestion {
    QuickCapture::default().suggest(text)
}
