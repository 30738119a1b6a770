//! Text and date helpers shared by the card renderers and chrome.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use std::fmt::Display;

pub const ELLIPSIS: &str = "...";

/// Summary length on full cards and grid tiles.
pub const SUMMARY_LIMIT: usize = 100;
/// Summary length on compact cards.
pub const COMPACT_SUMMARY_LIMIT: usize = 80;

/// First `limit` characters of `summary` followed by [`ELLIPSIS`].
///
/// The cut ignores word boundaries and the ellipsis is appended even when
/// nothing was cut. A missing summary yields just the ellipsis.
pub fn truncate_summary(summary: Option<&str>, limit: usize) -> String {
    let head: String = summary
        .unwrap_or_default()
        .chars()
        .take(limit)
        .collect();
    format!("{head}{ELLIPSIS}")
}

/// `M/D/YYYY` in the viewer's local time.
pub fn short_date(at: &DateTime<Utc>) -> String {
    format_short(&at.with_timezone(&Local))
}

/// `Month D, YYYY at HH:MM AM` in the viewer's local time.
pub fn long_date(at: &DateTime<Utc>) -> String {
    format_long(&at.with_timezone(&Local))
}

/// `Mon Jan 05 2026` in the viewer's local time.
pub fn day_date(at: &DateTime<Utc>) -> String {
    format_day(&at.with_timezone(&Local))
}

/// `Monday, January 5, 2026` for today in the viewer's local time.
pub fn masthead_date() -> String {
    format_masthead(&Local::now())
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn format_short<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y").to_string()
}

pub fn format_long<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

pub fn format_day<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%a %b %d %Y").to_string()
}

pub fn format_masthead<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}

/// Capitalizes the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
