use std::fmt;

use crate::alias::{AliasEntry, CommandId};
use crate::error::{RevelError, ALIAS_USAGE, DEADLINE_USAGE, EVENT_USAGE, TODO_USAGE};
use crate::model::{Task, TaskList};

/// Text returned for one input line, plus what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_exit: bool,
    pub kind: ReplyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Command(CommandId),
    Error,
}

impl Reply {
    pub(crate) fn command(id: CommandId, text: String) -> Self {
        Self {
            text,
            is_exit: id == CommandId::Bye,
            kind: ReplyKind::Command(id),
        }
    }

    pub(crate) fn error(err: &RevelError) -> Self {
        Self {
            text: err.to_string(),
            is_exit: false,
            kind: ReplyKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ReplyKind::Error
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn greeting() -> String {
    String::from("Hello! I'm Revel\nWhat can I do for you?")
}

pub fn farewell() -> String {
    String::from("Bye. Hope to see you again soon!")
}

pub fn task_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return String::from("Your task list is empty.");
    }
    numbered("Here are the tasks in your list:", tasks)
}

pub fn found_tasks(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return String::from("No matching tasks found.");
    }
    numbered("Here are the matching tasks in your list:", tasks)
}

pub fn task_added(task: &Task, count: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\n{}",
        task,
        CountLine(count)
    )
}

pub fn task_removed(task: &Task, count: usize) -> String {
    format!(
        "Got it. I've removed this task:\n  {}\n{}",
        task,
        CountLine(count)
    )
}

pub fn task_marked(task: &Task, changed: bool) -> String {
    if changed {
        format!("Nice! I've marked this task as done:\n  {}", task)
    } else {
        format!("This task is already marked as done:\n  {}", task)
    }
}

pub fn task_unmarked(task: &Task, changed: bool) -> String {
    if changed {
        format!("OK, I've marked this task as not done yet:\n  {}", task)
    } else {
        format!("This task is already not done:\n  {}", task)
    }
}

pub fn help(aliases: &str) -> String {
    format!(
        "Available Commands: {}\n{}\n{}\n{}\nUsage: mark|unmark|delete <number>\nUsage: find <keyword>\n{}",
        aliases, TODO_USAGE, DEADLINE_USAGE, EVENT_USAGE, ALIAS_USAGE
    )
}

pub fn alias_added(alias: &str, command: CommandId) -> String {
    format!("Added alias: {} -> {}", alias, command)
}

pub fn alias_removed(alias: &str) -> String {
    format!("Removed alias: {}", alias)
}

pub fn alias_list(aliases: &[AliasEntry]) -> String {
    if aliases.is_empty() {
        return String::from("No aliases defined.");
    }
    let lines: Vec<String> = aliases
        .iter()
        .map(|entry| format!("{} -> {}", entry.alias, entry.command))
        .collect();
    format!("Aliases:\n{}", lines.join("\n"))
}

pub fn save_warning(subject: &str, err: &RevelError) -> String {
    format!("Warning: could not save {} to disk: {}", subject, err)
}

fn numbered(header: &str, tasks: &TaskList) -> String {
    let lines: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect();
    format!("{}\n{}", header, lines.join("\n"))
}

struct CountLine(usize);

impl fmt::Display for CountLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Now you have {} task{} in the list.",
            self.0,
            if self.0 == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_line_pluralizes() {
        assert_eq!(CountLine(1).to_string(), "Now you have 1 task in the list.");
        assert_eq!(CountLine(0).to_string(), "Now you have 0 tasks in the list.");
    }

    #[test]
    fn lists_are_numbered_from_one() {
        let tasks = TaskList::from(vec![Task::todo("a"), Task::todo("b").with_done(true)]);
        assert_eq!(
            task_list(&tasks),
            "Here are the tasks in your list:\n1.[T][ ] a\n2.[T][X] b"
        );
        assert_eq!(task_list(&TaskList::new()), "Your task list is empty.");
    }

    #[test]
    fn alias_listing() {
        assert_eq!(alias_list(&[]), "No aliases defined.");
        assert_eq!(
            alias_list(&[
                AliasEntry::new("x", CommandId::Todo),
                AliasEntry::new("q", CommandId::Find),
            ]),
            "Aliases:\nx -> todo\nq -> find"
        );
    }
}
