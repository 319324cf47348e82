use tracing::debug;

use crate::alias::{AliasRegistry, CommandId};
use crate::error::Result;
use crate::tokenizer::split_command_and_args;
use crate::validate::{self, AliasAction, DeadlineArgs, EventArgs};

/// A fully validated command line, ready to run against the task list.
/// Task numbers are checked for shape here and for range when executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Bye,
    List,
    Todo(String),
    Deadline(DeadlineArgs),
    Event(EventArgs),
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Help,
    Find(String),
    Alias(AliasAction),
}

impl Command {
    pub fn id(&self) -> CommandId {
        match self {
            Command::Hello => CommandId::Hello,
            Command::Bye => CommandId::Bye,
            Command::List => CommandId::List,
            Command::Todo(_) => CommandId::Todo,
            Command::Deadline(_) => CommandId::Deadline,
            Command::Event(_) => CommandId::Event,
            Command::Mark(_) => CommandId::Mark,
            Command::Unmark(_) => CommandId::Unmark,
            Command::Delete(_) => CommandId::Delete,
            Command::Help => CommandId::Help,
            Command::Find(_) => CommandId::Find,
            Command::Alias(_) => CommandId::Alias,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Bye)
    }
}

/// Tokenize, resolve the command word through `aliases`, then validate the
/// arguments for that command. The first failing stage wins.
pub fn parse(line: &str, aliases: &AliasRegistry) -> Result<Command> {
    let input = split_command_and_args(line)?;
    let id = aliases.resolve(input.command)?;
    let args = input.args;

    let command = match id {
        CommandId::Hello => Command::Hello,
        CommandId::Bye => Command::Bye,
        CommandId::List => Command::List,
        CommandId::Help => Command::Help,
        CommandId::Todo => Command::Todo(validate::todo(args)?),
        CommandId::Deadline => Command::Deadline(validate::deadline(args)?),
        CommandId::Event => Command::Event(validate::event(args)?),
        CommandId::Mark => Command::Mark(validate::task_number(id, args)?),
        CommandId::Unmark => Command::Unmark(validate::task_number(id, args)?),
        CommandId::Delete => Command::Delete(validate::task_number(id, args)?),
        CommandId::Find => Command::Find(validate::keyword(args)?),
        CommandId::Alias => Command::Alias(validate::alias(args)?),
    };

    debug!(word = input.command, command = %id, "parsed command line");
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RevelError;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("hi", Command::Hello)]
    #[case("EXIT", Command::Bye)]
    #[case("ls", Command::List)]
    #[case("h", Command::Help)]
    #[case("t read book", Command::Todo("read book".into()))]
    #[case("tick 2", Command::Mark(2))]
    #[case("untick 1", Command::Unmark(1))]
    #[case("del 3", Command::Delete(3))]
    #[case("find  Book ", Command::Find("Book".into()))]
    #[case("alias list", Command::Alias(AliasAction::List))]
    fn builtin_aliases_dispatch(#[case] line: &str, #[case] expected: Command) {
        let registry = AliasRegistry::new();
        assert_eq!(parse(line, &registry).unwrap(), expected);
    }

    #[test]
    fn deadline_line_builds_descriptor() {
        let registry = AliasRegistry::new();
        let command = parse("deadline return book /by 2/12/2019 1800", &registry).unwrap();
        let by = NaiveDate::from_ymd_opt(2019, 12, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(
            command,
            Command::Deadline(DeadlineArgs {
                description: "return book".into(),
                by,
            })
        );
        assert_eq!(command.id(), CommandId::Deadline);
        assert!(!command.is_exit());
    }

    #[rstest]
    #[case("", RevelError::EmptyInput)]
    #[case("fly away", RevelError::UnknownCommand("fly".into()))]
    #[case("todo", RevelError::EmptyDescription { command: CommandId::Todo })]
    #[case("event party /to 2024-10-02 /from 2024-10-01", RevelError::OutOfOrderMarkers)]
    #[case("mark", RevelError::EmptyArgument { command: CommandId::Mark })]
    #[case("delete one", RevelError::NotANumber("one".into()))]
    #[case("find", RevelError::EmptyKeyword)]
    #[case("alias add x", RevelError::MalformedAliasCommand)]
    fn failures_short_circuit(#[case] line: &str, #[case] expected: RevelError) {
        let registry = AliasRegistry::new();
        assert_eq!(parse(line, &registry), Err(expected));
    }

    #[test]
    fn user_alias_dispatches_like_builtin() {
        let mut registry = AliasRegistry::new();
        registry.add_user_alias("x", CommandId::Todo).unwrap();
        assert_eq!(
            parse("X read book", &registry).unwrap(),
            parse("todo read book", &registry).unwrap()
        );
    }

    #[test]
    fn bye_is_exit() {
        let registry = AliasRegistry::new();
        assert!(parse("bb", &registry).unwrap().is_exit());
    }
}
