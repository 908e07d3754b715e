use regex::Regex;
use std::sync::LazyLock;

use crate::classify::vocab::Vocabulary;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*]\s+|•\s*|\d{1,3}[.)]\s+)").unwrap());

const SHORT_LINE_WORDS: usize = 6;

/// Pull list items out of `text`: marker stripped, edges trimmed, original
/// line order kept. Non-list text yields an empty vec, never an error.
pub fn extract_list_items(text: &str) -> Vec<String> {
    extract_with(text, Vocabulary::global())
}

pub(crate) fn extract_with(text: &str, vocab: &Vocabulary) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // Marked mode: every bulleted or numbered line is an item, anything
    // else (headers, stray prose) is skipped.
    if lines.iter().any(|line| is_marked_line(line)) {
        return lines
            .iter()
            .filter(|line| is_marked_line(line))
            .map(|line| strip_marker(line).trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
    }

    // Unmarked fallback: only when the text reads as a list anyway.
    let announced = lines.len() >= 2 && vocab.is_list_header(lines[0]);
    let body = if announced { &lines[1..] } else { &lines[..] };
    if announced || plain_list_shape(body) {
        return body.iter().map(|line| line.to_string()).collect();
    }

    Vec::new()
}

pub(crate) fn is_marked_line(line: &str) -> bool {
    MARKER_RE.is_match(line)
}

fn strip_marker(line: &str) -> &str {
    match MARKER_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Three or more short unmarked lines without sentence-terminal punctuation
/// read as a list even when nothing is bulleted.
pub(crate) fn plain_list_shape(lines: &[&str]) -> bool {
    lines.len() >= 3
        && lines.iter().all(|line| {
            !is_marked_line(line)
                && line.split_whitespace().count() <= SHORT_LINE_WORDS
                && !line.ends_with(['.', '!', '?'])
        })
}
