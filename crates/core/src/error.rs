use thiserror::Error;

use crate::alias::CommandId;

pub type Result<T, E = RevelError> = std::result::Result<T, E>;

pub const TODO_USAGE: &str = "Usage: todo <description>";
pub const DEADLINE_USAGE: &str = "Usage: deadline <description> /by <date/time>";
pub const EVENT_USAGE: &str = "Usage: event <description> /from <start date> /to <end date>";
pub const ALIAS_USAGE: &str =
    "Usage:\n  alias add <alias> <command>\n  alias remove <alias>\n  alias list";
pub const DATE_FORMATS_HINT: &str = "Accepted formats:\n  yyyy-MM-dd HHmm (e.g., 2019-12-02 1800)\n  yyyy-MM-dd HH:mm (e.g., 2019-12-02 18:00)\n  d/M/yyyy HHmm (e.g., 2/12/2019 1800)\n  yyyy-MM-dd";

/// Every failure a single command line can produce. All of them are shown to
/// the user as text; none of them ends the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevelError {
    #[error("Please enter a command. Type 'help' for a list of commands available to you.")]
    EmptyInput,

    #[error("Sorry! I don't know what '{0}' means.\nType 'help' for a list of commands available to you.")]
    UnknownCommand(String),

    #[error("Sorry, but the description of {command} cannot be empty.\n{}", usage_for(.command))]
    EmptyDescription { command: CommandId },

    #[error("Sorry, but {marker} is missing.\n{}", usage_for(.command))]
    MissingMarker {
        command: CommandId,
        marker: &'static str,
    },

    #[error("Sorry, but the format used is invalid: one or more arguments are missing.\n{}", usage_for(.command))]
    MalformedArguments { command: CommandId },

    #[error("Sorry, but the format used is invalid: '/from' must come before '/to'.\n{}", EVENT_USAGE)]
    OutOfOrderMarkers,

    #[error("Sorry, but '{0}' is not a valid date/time.\n{}", DATE_FORMATS_HINT)]
    InvalidDateTime(String),

    #[error("Sorry, but the task number cannot be empty.\nUsage: {command} <number>")]
    EmptyArgument { command: CommandId },

    #[error("Sorry, but the task number must be an integer, not '{0}'.")]
    NotANumber(String),

    #[error("{}", out_of_range_message(.number, .count))]
    IndexOutOfRange { number: i64, count: usize },

    #[error("Sorry, but the search keyword cannot be empty.\nUsage: find <keyword>")]
    EmptyKeyword,

    #[error("Sorry, but this alias command cannot be understood.\n{}", ALIAS_USAGE)]
    MalformedAliasCommand,

    #[error("Sorry, but '{0}' cannot be used as an alias: aliases must be a single word.")]
    InvalidAlias(String),

    #[error("Sorry, but '{0}' is a built-in alias and cannot be changed.")]
    ReservedAlias(String),

    #[error("Alias does not exist: {0}")]
    UnknownAlias(String),

    #[error("Unknown task type '{0}' in saved tasks.")]
    UnknownTaskType(String),

    #[error("Corrupt record '{record}': {reason}")]
    CorruptRecord { record: String, reason: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Expected '{0}' in the input.")]
    DelimiterNotFound(String),
}

impl RevelError {
    pub(crate) fn corrupt(record: impl Into<String>, reason: impl Into<String>) -> Self {
        RevelError::CorruptRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

fn usage_for(command: &CommandId) -> String {
    match command {
        CommandId::Todo => TODO_USAGE.to_string(),
        CommandId::Deadline => DEADLINE_USAGE.to_string(),
        CommandId::Event => EVENT_USAGE.to_string(),
        CommandId::Alias => ALIAS_USAGE.to_string(),
        other => format!("Usage: {}", other),
    }
}

fn out_of_range_message(number: &i64, count: &usize) -> String {
    if *count == 0 {
        return String::from("Sorry, but there are no tasks in your list yet.\nAdd a task and try again.");
    }
    format!(
        "Sorry, but task {} is not in the list (choose 1 to {}).\nPlease try another number.",
        number, count
    )
}
