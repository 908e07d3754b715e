use chrono::{Datelike, Local, NaiveDate, NaiveTime, Weekday};
use regex::Regex;
use std::sync::LazyLock;

use crate::classify::vocab::contains_phrase;
use crate::core::due_date::DueDate;

/// Relative phrases resolved against a reference date. Longer phrases come
/// first so "day after tomorrow" wins over its "tomorrow" suffix.
const RELATIVE_PHRASES: &[(&str, DateOffset)] = &[
    ("day after tomorrow", DateOffset::Days(2)),
    ("next month", DateOffset::Months(1)),
    ("next week", DateOffset::Weeks(1)),
    ("tomorrow", DateOffset::Days(1)),
    ("tonight", DateOffset::Days(0)),
    ("today", DateOffset::Days(0)),
    ("tmrw", DateOffset::Days(1)),
];

static IN_OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bin\s+(\d{1,3})\s+(day|days|week|weeks)\b").unwrap());

static WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b").unwrap()
});

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOffset {
    Days(i64),
    Weeks(i64),
    Months(u32),
}

impl DateOffset {
    fn add_to(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Days(n) => date + chrono::Duration::days(n),
            Self::Weeks(n) => date + chrono::Duration::weeks(n),
            Self::Months(n) => add_months(date, n),
        }
    }
}

/// Scan free text for a due date phrase, resolved against the local date.
///
/// Returns `None` when no recognized phrase is present; never fails.
pub fn extract_due_date(text: &str) -> Option<DueDate> {
    extract_due_date_from(text, Local::now().date_naive())
}

/// [`extract_due_date`] with an explicit reference date, so callers and
/// tests control what "today" means.
pub fn extract_due_date_from(text: &str, today: NaiveDate) -> Option<DueDate> {
    let lower = text.to_lowercase();
    let date = find_date(&lower, today)?;
    let due = match parse_time(&lower) {
        Some(time) => DueDate::at(date, time),
        None => DueDate::on(date),
    };
    Some(due)
}

/// Whether `lower` mentions any date cue the extractor understands.
pub(crate) fn has_date_phrase(lower: &str) -> bool {
    RELATIVE_PHRASES
        .iter()
        .any(|(phrase, _)| contains_phrase(lower, phrase))
        || IN_OFFSET_RE.is_match(lower)
        || WEEKDAY_RE.is_match(lower)
}

/// Whether `lower` mentions a clock time. Weaker than a date cue but still
/// points at something scheduled.
pub(crate) fn has_time_phrase(lower: &str) -> bool {
    TIME_RE.is_match(lower)
}

fn find_date(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    for (phrase, offset) in RELATIVE_PHRASES {
        if contains_phrase(lower, phrase) {
            return Some(offset.add_to(today));
        }
    }

    if let Some(caps) = IN_OFFSET_RE.captures(lower) {
        if let Ok(count) = caps[1].parse::<i64>() {
            let offset = if caps[2].starts_with("week") {
                DateOffset::Weeks(count)
            } else {
                DateOffset::Days(count)
            };
            return Some(offset.add_to(today));
        }
    }

    if let Some(caps) = WEEKDAY_RE.captures(lower) {
        let weekday = match &caps[1] {
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            _ => Weekday::Sun,
        };
        return Some(next_weekday(today, weekday));
    }

    None
}

/// First occurrence of `weekday` strictly after `today`, so "friday" typed
/// on a Friday means next Friday, not right now.
fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = weekday.num_days_from_monday() as i64;
    let current = today.weekday().num_days_from_monday() as i64;
    let ahead = (target - current - 1).rem_euclid(7) + 1;
    today + chrono::Duration::days(ahead)
}

/// Parse an "at HH[:MM][am|pm]" mention. A bare hour with no minutes and no
/// meridiem is too ambiguous to treat as a time.
fn parse_time(lower: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(lower)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    match caps.get(3).map(|m| m.as_str()) {
        Some("pm") if (1..=12).contains(&hour) => {
            let hour = if hour == 12 { 12 } else { hour + 12 };
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
        Some("am") if (1..=12).contains(&hour) => {
            let hour = if hour == 12 { 0 } else { hour };
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
        None if caps.get(2).is_some() => NaiveTime::from_hms_opt(hour, minute, 0),
        _ => None,
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total_months = date.month0() + months;
    let new_year = date.year() + (total_months / 12) as i32;
    let new_month = (total_months % 12) + 1;
    // Clamp day to valid range for the new month
    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    )
    .unwrap()
    .pred_opt()
    .unwrap()
    .day()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-02-23 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 23).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tomorrow_is_one_day_ahead() {
        let due = extract_due_date_from("Buy milk tomorrow", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
        assert_eq!(due.time, None);
    }

    #[test]
    fn today_and_tonight_stay_on_the_reference_date() {
        let due = extract_due_date_from("finish the slides today", monday()).unwrap();
        assert_eq!(due.date, monday());
        let due = extract_due_date_from("submit the report tonight", monday()).unwrap();
        assert_eq!(due.date, monday());
    }

    #[test]
    fn day_after_tomorrow_wins_over_its_suffix() {
        let due = extract_due_date_from("call back day after tomorrow", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 25));
    }

    #[test]
    fn tmrw_shorthand() {
        let due = extract_due_date_from("pay rent tmrw", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
    }

    #[test]
    fn next_week_and_next_month() {
        let due = extract_due_date_from("review budget next week", monday()).unwrap();
        assert_eq!(due.date, date(2026, 3, 2));
        let due = extract_due_date_from("renew passport next month", monday()).unwrap();
        assert_eq!(due.date, date(2026, 3, 23));
    }

    #[test]
    fn next_month_clamps_to_month_end() {
        let jan_31 = date(2026, 1, 31);
        let due = extract_due_date_from("pay invoice next month", jan_31).unwrap();
        assert_eq!(due.date, date(2026, 2, 28));
    }

    #[test]
    fn in_n_days_or_weeks() {
        let due = extract_due_date_from("follow up in 3 days", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 26));
        let due = extract_due_date_from("check results in 2 weeks", monday()).unwrap();
        assert_eq!(due.date, date(2026, 3, 9));
        let due = extract_due_date_from("rotate keys in 1 day", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
    }

    #[test]
    fn weekday_names_resolve_strictly_forward() {
        let due = extract_due_date_from("send the draft by friday", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 27));
        // Monday mentioned on a Monday means next week's Monday.
        let due = extract_due_date_from("gym on monday", monday()).unwrap();
        assert_eq!(due.date, date(2026, 3, 2));
    }

    #[test]
    fn time_of_day_attaches_when_present() {
        let due = extract_due_date_from("dentist tomorrow at 3pm", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
        assert_eq!(due.time, Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap()));

        let due = extract_due_date_from("standup today at 9:15am", monday()).unwrap();
        assert_eq!(due.time, Some(NaiveTime::from_hms_opt(9, 15, 0).unwrap()));

        let due = extract_due_date_from("train today at 17:30", monday()).unwrap();
        assert_eq!(due.time, Some(NaiveTime::from_hms_opt(17, 30, 0).unwrap()));

        let due = extract_due_date_from("lunch tomorrow at 12pm", monday()).unwrap();
        assert_eq!(due.time, Some(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));

        let due = extract_due_date_from("flight tomorrow at 12:05am", monday()).unwrap();
        assert_eq!(due.time, Some(NaiveTime::from_hms_opt(0, 5, 0).unwrap()));
    }

    #[test]
    fn unparseable_time_does_not_block_the_date() {
        let due = extract_due_date_from("meet tomorrow at 13pm", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
        assert_eq!(due.time, None);

        // A bare hour is too ambiguous ("at 5 Main Street").
        let due = extract_due_date_from("meet today at 5", monday()).unwrap();
        assert_eq!(due.time, None);
    }

    #[test]
    fn no_phrase_means_no_date() {
        assert_eq!(extract_due_date_from("Buy milk", monday()), None);
        assert_eq!(extract_due_date_from("", monday()), None);
        assert_eq!(
            extract_due_date_from("Ideas for the blog post", monday()),
            None
        );
        // Embedded in a longer word, not a date mention.
        assert_eq!(
            extract_due_date_from("the todays-special menu", monday()),
            None
        );
    }

    #[test]
    fn wrapper_resolves_against_the_local_clock() {
        let today = Local::now().date_naive();
        let due = extract_due_date("Buy milk tomorrow").unwrap();
        assert_eq!(due.date, today + chrono::Duration::days(1));
        assert_eq!(extract_due_date("Buy milk"), None);
    }

    #[test]
    fn matching_ignores_case() {
        let due = extract_due_date_from("Call mom TOMORROW", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 24));
        let due = extract_due_date_from("Ship it by FRIDAY", monday()).unwrap();
        assert_eq!(due.date, date(2026, 2, 27));
    }

    #[test]
    fn date_cue_probe_matches_extractor() {
        assert!(has_date_phrase("buy milk tomorrow"));
        assert!(has_date_phrase("follow up in 3 days"));
        assert!(has_date_phrase("send it by friday"));
        assert!(!has_date_phrase("buy milk"));
        assert!(!has_date_phrase("the todays-special menu"));
    }

    #[test]
    fn time_cue_probe() {
        assert!(has_time_phrase("call mom at 3pm"));
        assert!(has_time_phrase("standup at 9:15"));
        assert!(!has_time_phrase("look at this"));
        assert!(!has_time_phrase("buy milk"));
    }
}
