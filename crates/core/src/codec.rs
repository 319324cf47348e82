//! One-line encoding of a task for the task file:
//!
//! ```text
//! TD | 0 | <description>
//! DL | 1 | <description> | <by>
//! E | 0 | <description> | <from> | <to>
//! ```
//!
//! Dates use the ISO local form from [`crate::datetime::format_for_storage`].
//! The separator tolerates surrounding whitespace. Dates are taken from the end
//! of the line, so a description may itself contain `|`.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::datetime::{format_for_storage, parse_storage};
use crate::error::{Result, RevelError};
use crate::model::{Task, TaskKind};

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").expect("valid regex"));

const TODO_CODE: &str = "TD";
const DEADLINE_CODE: &str = "DL";
const EVENT_CODE: &str = "E";

pub fn encode(task: &Task) -> String {
    let flag = if task.is_done() { "1" } else { "0" };
    match task.kind() {
        TaskKind::ToDo => format!("{} | {} | {}", TODO_CODE, flag, task.description()),
        TaskKind::Deadline { by } => format!(
            "{} | {} | {} | {}",
            DEADLINE_CODE,
            flag,
            task.description(),
            format_for_storage(by)
        ),
        TaskKind::Event { from, to } => format!(
            "{} | {} | {} | {} | {}",
            EVENT_CODE,
            flag,
            task.description(),
            format_for_storage(from),
            format_for_storage(to)
        ),
    }
}

pub fn decode(line: &str) -> Result<Task> {
    let trimmed = line.trim();
    let mut head = SEPARATOR.splitn(trimmed, 3);
    let code = head.next().unwrap_or_default();
    if ![TODO_CODE, DEADLINE_CODE, EVENT_CODE].contains(&code) {
        return Err(RevelError::UnknownTaskType(code.to_string()));
    }

    let flag = head
        .next()
        .ok_or_else(|| RevelError::corrupt(trimmed, "missing done flag"))?;
    let done = match flag {
        "1" => true,
        "0" => false,
        other => {
            return Err(RevelError::corrupt(
                trimmed,
                format!("done flag must be 0 or 1, found '{}'", other),
            ))
        }
    };
    let rest = head
        .next()
        .ok_or_else(|| RevelError::corrupt(trimmed, "missing description"))?;

    let task = match code {
        DEADLINE_CODE => {
            let (description, [by]) = split_trailing_dates(trimmed, rest)?;
            Task::deadline(require_description(trimmed, description)?, by)
        }
        EVENT_CODE => {
            let (description, [from, to]) = split_trailing_dates(trimmed, rest)?;
            Task::event(require_description(trimmed, description)?, from, to)
        }
        _ => Task::todo(require_description(trimmed, rest)?),
    };
    Ok(task.with_done(done))
}

/// Peel `N` date fields off the end of `rest`, returning the remaining
/// description and the dates in file order.
fn split_trailing_dates<'a, const N: usize>(
    record: &str,
    rest: &'a str,
) -> Result<(&'a str, [NaiveDateTime; N])> {
    let mut description = rest;
    let mut dates = [NaiveDateTime::MIN; N];
    for slot in dates.iter_mut().rev() {
        let separator = SEPARATOR
            .find_iter(description)
            .last()
            .ok_or_else(|| RevelError::corrupt(record, "too few fields"))?;
        let raw = &description[separator.end()..];
        *slot = parse_storage(raw).ok_or_else(|| {
            RevelError::corrupt(record, format!("unreadable date '{}'", raw))
        })?;
        description = &description[..separator.start()];
    }
    Ok((description, dates))
}

fn require_description<'a>(record: &str, description: &'a str) -> Result<&'a str> {
    let description = description.trim();
    if description.is_empty() {
        return Err(RevelError::corrupt(record, "empty description"));
    }
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[rstest]
    #[case("TD | 0 | read book")]
    #[case("TD | 1 | read book")]
    #[case("DL | 0 | return book | 2019-12-02T18:00:00")]
    #[case("E | 1 | project meeting | 2024-10-01T00:00:00 | 2024-10-01T14:30:00")]
    #[case("TD | 0 | pipes | are | fine")]
    fn canonical_lines_survive_decode_encode(#[case] line: &str) {
        assert_eq!(encode(&decode(line).unwrap()), line);
    }

    #[test]
    fn decode_tolerates_loose_spacing() {
        let task = decode("DL|1|  return book   |2019-12-02T18:00").unwrap();
        assert_eq!(
            task,
            Task::deadline("return book", at(2019, 12, 2, 18, 0)).with_done(true)
        );
    }

    #[test]
    fn tasks_survive_encode_decode() {
        let tasks = vec![
            Task::todo("read book"),
            Task::todo("read book").with_done(true),
            Task::deadline("return book", at(2019, 12, 2, 18, 0)),
            Task::event("party", at(2024, 10, 2, 0, 0), at(2024, 10, 1, 0, 0)).with_done(true),
        ];
        for task in tasks {
            assert_eq!(decode(&encode(&task)).unwrap(), task);
        }
    }

    #[test]
    fn unknown_type_is_reported() {
        assert_eq!(
            decode("X | 0 | what"),
            Err(RevelError::UnknownTaskType("X".into()))
        );
    }

    #[rstest]
    #[case("TD | 0")]
    #[case("TD | 2 | read book")]
    #[case("DL | 0 | return book")]
    #[case("DL | 0 | return book | tomorrow")]
    #[case("E | 0 | party | 2024-10-01T00:00:00")]
    #[case("DL | 0 | | 2019-12-02T18:00:00")]
    fn malformed_records_are_corrupt(#[case] line: &str) {
        assert!(matches!(
            decode(line),
            Err(RevelError::CorruptRecord { .. })
        ));
    }
}
