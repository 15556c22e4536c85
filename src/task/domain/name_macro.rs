//! Inline shorthand parsing for task names.
//!
//! A task name may carry directives that stand in for structured fields:
//!
//! - `!before DD.MM.YYYY` (or `-` separators, mixed freely) sets the deadline
//!   to midnight UTC on that date.
//! - `!1`, `!2`, `!3`, `!4` set the priority to `Critical`, `High`, `Medium`,
//!   or `Low`.
//!
//! Directives only fill fields the caller left empty and are stripped from
//! the name once honoured.

use super::{PriorityInput, TaskPriority};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is exercised by unit tests"
)]
static DEADLINE_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!before (\d{2}[.-]\d{2}[.-]\d{4})").expect("deadline macro pattern compiles")
});

/// Priority tokens in scan order; the first one present wins.
const PRIORITY_MACROS: [(&str, TaskPriority); 4] = [
    ("!1", TaskPriority::Critical),
    ("!2", TaskPriority::High),
    ("!3", TaskPriority::Medium),
    ("!4", TaskPriority::Low),
];

/// Result of resolving name directives against explicit input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTaskName {
    /// Name with honoured directives removed and whitespace trimmed.
    pub name: String,
    /// Explicit deadline, else the directive deadline, else `None`.
    pub deadline: Option<DateTime<Utc>>,
    /// Explicit priority, else the directive priority, else `None`.
    pub priority: Option<PriorityInput>,
}

/// Parser for task name directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMacros;

impl NameMacros {
    /// Resolves directives in `raw_name`.
    ///
    /// Explicit values always win. A deadline directive whose date does not
    /// exist in the calendar is left in the name untouched.
    #[must_use]
    pub fn parse(
        raw_name: &str,
        explicit_deadline: Option<DateTime<Utc>>,
        explicit_priority: Option<PriorityInput>,
    ) -> ParsedTaskName {
        let mut name = raw_name.to_owned();

        let deadline = explicit_deadline.or_else(|| take_deadline(&mut name));
        let priority =
            explicit_priority.or_else(|| take_priority(&mut name).map(PriorityInput::Known));

        ParsedTaskName {
            name: name.trim().to_owned(),
            deadline,
            priority,
        }
    }
}

fn take_deadline(name: &mut String) -> Option<DateTime<Utc>> {
    let captures = DEADLINE_MACRO.captures(name)?;
    let raw_date = captures.get(1)?.as_str().replace('-', ".");
    let date = NaiveDate::parse_from_str(&raw_date, "%d.%m.%Y").ok()?;
    let cleaned = DEADLINE_MACRO.replace_all(name, "").into_owned();
    *name = cleaned;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

fn take_priority(name: &mut String) -> Option<TaskPriority> {
    let (token, priority) = PRIORITY_MACROS
        .iter()
        .find(|(token, _)| name.contains(token))?;
    *name = name.replace(token, "");
    Some(*priority)
}
