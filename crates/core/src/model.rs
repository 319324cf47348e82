use std::fmt;

use chrono::NaiveDateTime;

use crate::datetime::format_for_display;
use crate::error::Result;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline {
        by: NaiveDateTime,
    },
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag used in conversation output.
    pub fn symbol(&self) -> &'static str {
        match self {
            TaskKind::ToDo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::ToDo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    fn status_icon(&self) -> &'static str {
        if self.done {
            "X"
        } else {
            " "
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.symbol(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_for_display(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_for_display(from),
                format_for_display(to)
            ),
        }
    }
}

/// Outcome of marking or unmarking; `changed` is false when the task was
/// already in the requested state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub task: Task,
    pub changed: bool,
}

/// Ordered task store addressed by 1-based task numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, number: i64) -> Result<&Task> {
        let index = validate::task_index(number, self.len())?;
        Ok(&self.tasks[index])
    }

    pub fn mark_done(&mut self, number: i64) -> Result<StatusUpdate> {
        self.set_done(number, true)
    }

    pub fn mark_undone(&mut self, number: i64) -> Result<StatusUpdate> {
        self.set_done(number, false)
    }

    /// Remove and return a task; every later task moves up by one number.
    pub fn delete(&mut self, number: i64) -> Result<Task> {
        let index = validate::task_index(number, self.len())?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `keyword`, ignoring case, in list order.
    pub fn find(&self, keyword: &str) -> TaskList {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn set_done(&mut self, number: i64, done: bool) -> Result<StatusUpdate> {
        let index = validate::task_index(number, self.len())?;
        let task = &mut self.tasks[index];
        let changed = task.done != done;
        task.done = done;
        Ok(StatusUpdate {
            task: task.clone(),
            changed,
        })
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
