use serde::{Deserialize, Serialize};

fn default_auto_apply_threshold() -> f32 {
    0.7
}

/// Tuning for the quick-capture flow. The embedding application owns
/// storage and hands the struct in; this crate performs no config I/O.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Suggestions scoring above this confidence apply without asking.
    pub auto_apply_threshold: f32,
    /// Extra action verbs merged into the built-in vocabulary.
    pub extra_action_verbs: Vec<String>,
    /// Extra list-announcing headers merged into the built-in vocabulary.
    pub extra_list_headers: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            auto_apply_threshold: default_auto_apply_threshold(),
            extra_action_verbs: Vec::new(),
            extra_list_headers: Vec::new(),
        }
    }
}
