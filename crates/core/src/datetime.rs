//! Parsing and formatting of the date/time values attached to deadlines and events.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, RevelError};

/// One accepted input grammar: the exact shape of the text, then the chrono
/// format that reads it. chrono alone would also take one-digit fields.
struct InputGrammar {
    shape: Regex,
    format: &'static str,
    date_only: bool,
}

impl InputGrammar {
    fn new(shape: &str, format: &'static str, date_only: bool) -> Self {
        Self {
            shape: Regex::new(shape).expect("valid regex"),
            format,
            date_only,
        }
    }

    fn read(&self, raw: &str) -> Option<NaiveDateTime> {
        if !self.shape.is_match(raw) {
            return None;
        }
        if self.date_only {
            NaiveDate::parse_from_str(raw, self.format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        } else {
            NaiveDateTime::parse_from_str(raw, self.format).ok()
        }
    }
}

/// Grammars accepted from users, in priority order.
static INPUT_GRAMMARS: Lazy<[InputGrammar; 4]> = Lazy::new(|| {
    [
        InputGrammar::new(r"^\d{4}-\d{2}-\d{2} \d{4}$", "%Y-%m-%d %H%M", false),
        InputGrammar::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$", "%Y-%m-%d %H:%M", false),
        InputGrammar::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{4}$", "%d/%m/%Y %H%M", false),
        InputGrammar::new(r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d", true),
    ]
});

const DISPLAY_DATE: &str = "%d/%m/%Y";
const DISPLAY_DATE_TIME: &str = "%d/%m/%Y %H:%M";

const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const STORAGE_FORMATS_ACCEPTED: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a user supplied date/time. A bare date resolves to midnight.
pub fn parse(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    INPUT_GRAMMARS
        .iter()
        .find_map(|grammar| grammar.read(trimmed))
        .ok_or_else(|| RevelError::InvalidDateTime(trimmed.to_string()))
}

/// Render for conversation output. Midnight is shown as a bare date, so an
/// event scheduled at exactly 00:00 reads the same as a date-only entry.
pub fn format_for_display(timestamp: &NaiveDateTime) -> String {
    if timestamp.hour() == 0 && timestamp.minute() == 0 {
        timestamp.format(DISPLAY_DATE).to_string()
    } else {
        timestamp.format(DISPLAY_DATE_TIME).to_string()
    }
}

/// Lossless ISO-8601 local date-time used in the task file.
pub fn format_for_storage(timestamp: &NaiveDateTime) -> String {
    timestamp.format(STORAGE_FORMAT).to_string()
}

/// Inverse of [`format_for_storage`]; also accepts minute precision and fractional seconds.
pub fn parse_storage(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    STORAGE_FORMATS_ACCEPTED
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
