//! Per-command argument validation. Each function takes the trimmed argument
//! remainder of a command line and returns a typed value or the reason it was
//! rejected.

use chrono::NaiveDateTime;

use crate::alias::CommandId;
use crate::datetime;
use crate::error::{Result, RevelError};
use crate::tokenizer::{extract_after, extract_before, extract_between};

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineArgs {
    pub description: String,
    pub by: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventArgs {
    pub description: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasAction {
    Add { alias: String, command: CommandId },
    Remove { alias: String },
    List,
}

pub fn todo(args: &str) -> Result<String> {
    if args.is_empty() {
        return Err(RevelError::EmptyDescription {
            command: CommandId::Todo,
        });
    }
    Ok(args.to_string())
}

pub fn deadline(args: &str) -> Result<DeadlineArgs> {
    let command = CommandId::Deadline;
    if args.is_empty() {
        return Err(RevelError::EmptyDescription { command });
    }
    if !args.contains(BY) {
        return Err(RevelError::MissingMarker {
            command,
            marker: BY,
        });
    }

    let description = extract_before(args, BY)?;
    let raw_by = extract_after(args, BY)?;
    if description.is_empty() || raw_by.is_empty() {
        return Err(RevelError::MalformedArguments { command });
    }

    Ok(DeadlineArgs {
        description: description.to_string(),
        by: datetime::parse(raw_by)?,
    })
}

pub fn event(args: &str) -> Result<EventArgs> {
    let command = CommandId::Event;
    if args.is_empty() {
        return Err(RevelError::EmptyDescription { command });
    }

    let (from_pos, to_pos) = match (args.find(FROM), args.find(TO)) {
        (Some(from_pos), Some(to_pos)) => (from_pos, to_pos),
        (None, _) => {
            return Err(RevelError::MissingMarker {
                command,
                marker: FROM,
            })
        }
        (_, None) => {
            return Err(RevelError::MissingMarker {
                command,
                marker: TO,
            })
        }
    };
    if to_pos < from_pos {
        return Err(RevelError::OutOfOrderMarkers);
    }

    let description = extract_before(args, FROM)?;
    let raw_from = extract_between(args, FROM, TO)?;
    let raw_to = extract_after(args, TO)?;
    if description.is_empty() || raw_from.is_empty() || raw_to.is_empty() {
        return Err(RevelError::MalformedArguments { command });
    }

    // Only the marker order is checked; `from` may still be later than `to`.
    Ok(EventArgs {
        description: description.to_string(),
        from: datetime::parse(raw_from)?,
        to: datetime::parse(raw_to)?,
    })
}

/// Presence and integer shape of a task number for mark/unmark/delete.
pub fn task_number(command: CommandId, args: &str) -> Result<i64> {
    if args.is_empty() {
        return Err(RevelError::EmptyArgument { command });
    }
    args.trim()
        .parse::<i64>()
        .map_err(|_| RevelError::NotANumber(args.to_string()))
}

/// Bounds check of a 1-based task number against the live list size.
/// Returns the 0-based position.
pub fn task_index(number: i64, count: usize) -> Result<usize> {
    match usize::try_from(number) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(RevelError::IndexOutOfRange { number, count }),
    }
}

pub fn keyword(args: &str) -> Result<String> {
    let keyword = args.trim();
    if keyword.is_empty() {
        return Err(RevelError::EmptyKeyword);
    }
    Ok(keyword.to_string())
}

pub fn alias(args: &str) -> Result<AliasAction> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let Some(action) = parts.first() else {
        return Err(RevelError::MalformedAliasCommand);
    };

    match (action.to_ascii_lowercase().as_str(), parts.len()) {
        ("add", 3) => Ok(AliasAction::Add {
            alias: parts[1].to_string(),
            command: parts[2].parse()?,
        }),
        ("remove", 2) => Ok(AliasAction::Remove {
            alias: parts[1].to_string(),
        }),
        ("list", 1) => Ok(AliasAction::List),
        _ => Err(RevelError::MalformedAliasCommand),
    }
}
