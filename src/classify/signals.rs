use regex::Regex;
use std::sync::LazyLock;

use crate::classify::dates;
use crate::classify::items;
use crate::classify::vocab::Vocabulary;
use crate::core::content_type::ContentType;

static CHECKBOX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(?: |x|X)?\]").unwrap());

// Signal weights. Explicit structure outweighs lexical cues so that a
// bulleted "buy list" stays a list even though "buy" is an action verb.
const W_MARKED_LINES: i32 = 4;
const W_ANNOUNCED: i32 = 3;
const W_PLAIN_LINES: i32 = 2;
const W_CHECKBOX: i32 = 3;
const W_LEADING_VERB_SHORT: i32 = 3;
const W_LEADING_VERB: i32 = 1;
const W_TASK_PHRASE: i32 = 2;
const W_DATE_CUE: i32 = 1;
const W_URGENCY: i32 = 1;
const W_MULTI_SENTENCE: i32 = 3;
const W_PARAGRAPH: i32 = 1;
const W_LONG_TEXT: i32 = 1;

const SHORT_CLAUSE_WORDS: usize = 12;
const MIN_PROSE_WORDS: usize = 9;
const LONG_TEXT_CHARS: usize = 100;

/// Per-category evidence gathered in one pass over the text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Signals {
    words: usize,
    explicit_list: bool,
    plain_lines: bool,
    list: i32,
    task: i32,
    note: i32,
}

impl Signals {
    pub(crate) fn scan(text: &str, vocab: &Vocabulary) -> Self {
        let lower = text.to_lowercase();
        let words = text.split_whitespace().count();
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let marked = lines.iter().filter(|l| items::is_marked_line(l)).count();
        let announced = lines.len() >= 2
            && !items::is_marked_line(lines[0])
            && vocab.is_list_header(lines[0]);
        let body = if announced { &lines[1..] } else { &lines[..] };
        let plain_lines = marked == 0 && items::plain_list_shape(body);

        let mut list = 0;
        if marked > 0 {
            list += W_MARKED_LINES;
        }
        if announced {
            list += W_ANNOUNCED;
        }
        if plain_lines {
            list += W_PLAIN_LINES;
        }

        let mut task = 0;
        let leading_verb = lines.first().is_some_and(|line| {
            strip_leading_checkbox(line)
                .split_whitespace()
                .next()
                .is_some_and(|word| vocab.is_action_verb(word))
        });
        if leading_verb {
            // A lone short imperative clause is a task on its own.
            task += if lines.len() == 1 && words <= SHORT_CLAUSE_WORDS {
                W_LEADING_VERB_SHORT
            } else {
                W_LEADING_VERB
            };
        }
        if CHECKBOX_RE.is_match(text) {
            task += W_CHECKBOX;
        }
        if vocab.has_task_phrase(&lower) {
            task += W_TASK_PHRASE;
        }
        if dates::has_date_phrase(&lower) || dates::has_time_phrase(&lower) {
            task += W_DATE_CUE;
        }
        if vocab.has_urgency(&lower) {
            task += W_URGENCY;
        }

        let mut note = 0;
        let terminals: usize = lines
            .iter()
            .filter(|l| !items::is_marked_line(l))
            .map(|l| l.chars().filter(|c| matches!(c, '.' | '!' | '?')).count())
            .sum();
        if terminals >= 2 && words >= MIN_PROSE_WORDS {
            note += W_MULTI_SENTENCE;
        }
        if has_paragraph_break(text) {
            note += W_PARAGRAPH;
        }
        if text.trim().chars().count() > LONG_TEXT_CHARS {
            note += W_LONG_TEXT;
        }

        Signals {
            words,
            explicit_list: marked > 0 || announced,
            plain_lines,
            list,
            task,
            note,
        }
    }

    /// Category precedence: explicit list structure, then task, then the
    /// unmarked-lines list shape, then note. Degenerate input is note by
    /// contract.
    pub(crate) fn detect(&self) -> ContentType {
        if self.words <= 1 {
            return ContentType::Note;
        }
        if self.explicit_list {
            return ContentType::List;
        }
        if self.task > 0 && self.task >= self.note {
            return ContentType::Task;
        }
        if self.plain_lines {
            return ContentType::List;
        }
        ContentType::Note
    }

    /// Margin-based score: 0.5 when nothing distinguishes the candidate,
    /// shifted by how far its evidence leads or trails the best competitor.
    pub(crate) fn confidence(&self, candidate: ContentType) -> f32 {
        if self.words <= 1 {
            return if candidate == ContentType::Note { 0.8 } else { 0.2 };
        }
        let support = self.score(candidate);
        let competing = ContentType::ALL
            .iter()
            .filter(|t| **t != candidate)
            .map(|t| self.score(*t))
            .max()
            .unwrap_or(0);
        let raw = 0.5 + 0.1 * (support - competing) as f32;
        raw.clamp(0.0, 1.0)
    }

    fn score(&self, candidate: ContentType) -> i32 {
        match candidate {
            ContentType::Task => self.task,
            ContentType::List => self.list,
            ContentType::Note => self.note,
        }
    }
}

fn strip_leading_checkbox(line: &str) -> &str {
    match CHECKBOX_RE.find(line) {
        Some(m) if m.start() == 0 => line[m.end()..].trim_start(),
        _ => line,
    }
}

fn has_paragraph_break(text: &str) -> bool {
    let mut seen_content = false;
    let mut blank_after_content = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_after_content = seen_content;
        } else {
            if blank_after_content {
                return true;
            }
            seen_content = true;
        }
    }
    false
}
