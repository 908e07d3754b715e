use std::collections::HashSet;
use std::sync::LazyLock;

/// Imperative verbs that open a typical captured task.
pub const ACTION_VERBS: &[&str] = &[
    "add", "ask", "book", "buy", "call", "cancel", "check", "clean", "complete",
    "create", "delete", "drop", "email", "finish", "fix", "get", "grab",
    "install", "order", "pay", "pick", "plan", "print", "read", "renew",
    "return", "review", "schedule", "send", "sign", "start", "submit", "take",
    "text", "update", "write",
];

/// Phrases that announce a task even when the leading word is not a verb.
pub const TASK_PHRASES: &[&str] = &[
    "don't forget",
    "don’t forget",
    "dont forget",
    "make sure",
    "need to",
    "remember to",
];

/// Keywords that mark a heading line as announcing a list.
pub const LIST_HEADERS: &[&str] = &[
    "checklist",
    "groceries",
    "grocery",
    "list",
    "shopping",
    "things to buy",
    "things to do",
    "to do",
    "to-do",
    "todo",
    "wishlist",
];

/// Priority markers that push short text toward the task category.
pub const URGENCY_MARKERS: &[&str] = &["asap", "critical", "important", "urgent", "urgently"];

/// Fixed keyword tables used by the classifier, optionally extended by the
/// embedding application. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    action_verbs: HashSet<String>,
    task_phrases: Vec<String>,
    list_headers: Vec<String>,
    urgency_markers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            action_verbs: ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            task_phrases: TASK_PHRASES.iter().map(|p| p.to_string()).collect(),
            list_headers: LIST_HEADERS.iter().map(|h| h.to_string()).collect(),
            urgency_markers: URGENCY_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Default tables plus caller-supplied verbs and list headers.
    pub fn with_extras(extra_verbs: &[String], extra_headers: &[String]) -> Self {
        let mut vocab = Self::default();
        vocab
            .action_verbs
            .extend(extra_verbs.iter().map(|v| v.to_lowercase()));
        vocab
            .list_headers
            .extend(extra_headers.iter().map(|h| h.to_lowercase()));
        vocab
    }

    /// Shared default instance backing the module-level functions.
    pub(crate) fn global() -> &'static Vocabulary {
        static GLOBAL: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::default);
        &GLOBAL
    }

    /// Whether `word` (edge punctuation ignored) is a known action verb.
    pub fn is_action_verb(&self, word: &str) -> bool {
        let cleaned = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        !cleaned.is_empty() && self.action_verbs.contains(&cleaned)
    }

    /// Whether `line` announces a list: short, not prose-terminated, with a
    /// header keyword up front or on a colon-terminated line. A keyword
    /// buried mid-sentence ("I need to do laundry") announces nothing.
    pub fn is_list_header(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.ends_with(['.', '!', '?']) {
            return false;
        }
        if line.split_whitespace().count() > 6 {
            return false;
        }
        let lower = line.to_lowercase();
        let colon = lower.ends_with(':');
        self.list_headers
            .iter()
            .any(|h| contains_phrase(&lower, h) && (colon || lower.starts_with(h.as_str())))
    }

    pub fn has_task_phrase(&self, lower: &str) -> bool {
        self.task_phrases.iter().any(|p| contains_phrase(lower, p))
    }

    pub fn has_urgency(&self, lower: &str) -> bool {
        self.urgency_markers.iter().any(|m| contains_phrase(lower, m))
    }
}

/// Word-boundary substring search. Callers pass pre-lowercased inputs.
pub(crate) fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(phrase) {
        let at = start + pos;
        let end = at + phrase.len();
        let before = haystack[..at].chars().next_back();
        let after = haystack[end..].chars().next();
        if !before.is_some_and(|c| c.is_alphanumeric())
            && !after.is_some_and(|c| c.is_alphanumeric())
        {
            return true;
        }
        start = end;
    }
    false
}
