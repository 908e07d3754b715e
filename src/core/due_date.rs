use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A due date recognized in free text.
///
/// The time of day is best-effort: "tomorrow at 3pm" carries one, plain
/// "tomorrow" does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl DueDate {
    pub fn on(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }
}
