use tracing::{debug, info, warn};

use crate::alias::AliasRegistry;
use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{Task, TaskList};
use crate::parser::{self, Command};
use crate::reply::{self, Reply};
use crate::storage::{AliasStorage, TaskStorage};
use crate::validate::AliasAction;

/// One conversation: the task list, the alias registry and where both are saved.
/// Lines are handled strictly one at a time.
#[derive(Debug)]
pub struct Session {
    tasks: TaskList,
    aliases: AliasRegistry,
    task_storage: TaskStorage,
    alias_storage: AliasStorage,
    startup_warnings: Vec<String>,
}

impl Session {
    pub fn open(config: &AppConfig) -> Self {
        Self::with_storage(
            TaskStorage::new(config.tasks_path()),
            AliasStorage::new(config.aliases_path()),
        )
    }

    /// Load aliases and tasks. Neither failure is fatal: the session starts
    /// without user aliases or with an empty list, and records a warning.
    pub fn with_storage(task_storage: TaskStorage, alias_storage: AliasStorage) -> Self {
        let mut startup_warnings = Vec::new();

        let mut aliases = AliasRegistry::new();
        if let Err(err) = alias_storage
            .load()
            .and_then(|entries| aliases.replace_all(entries))
        {
            warn!(path = %alias_storage.path().display(), error = %err, "ignoring alias file");
            startup_warnings.push(format!(
                "Could not load your aliases, continuing without them: {}",
                err
            ));
        }

        let tasks = match task_storage.load() {
            Ok(tasks) => TaskList::from(tasks),
            Err(err) => {
                warn!(path = %task_storage.path().display(), error = %err, "ignoring task file");
                startup_warnings.push(format!(
                    "Loading error occurred! Your task list could not be read: {}\nStarting with an empty task list.",
                    err
                ));
                TaskList::new()
            }
        };

        info!(
            tasks = tasks.len(),
            aliases = aliases.user_aliases().len(),
            "session opened"
        );

        Self {
            tasks,
            aliases,
            task_storage,
            alias_storage,
            startup_warnings,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    pub fn startup_warnings(&self) -> &[String] {
        &self.startup_warnings
    }

    /// Parse and run one input line. Errors come back as reply text.
    pub fn respond(&mut self, line: &str) -> Reply {
        let outcome = parser::parse(line, &self.aliases).and_then(|command| {
            let id = command.id();
            self.execute(command).map(|text| (id, text))
        });

        match outcome {
            Ok((id, text)) => Reply::command(id, text),
            Err(err) => {
                debug!(error = %err, "command rejected");
                Reply::error(&err)
            }
        }
    }

    /// Run a parsed command. Task numbers are range-checked here, against the
    /// list as it is right now.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Hello => Ok(reply::greeting()),
            Command::Bye => Ok(reply::farewell()),
            Command::List => Ok(reply::task_list(&self.tasks)),
            Command::Help => Ok(reply::help(&self.aliases.help_text())),
            Command::Todo(description) => Ok(self.add(Task::todo(description))),
            Command::Deadline(args) => Ok(self.add(Task::deadline(args.description, args.by))),
            Command::Event(args) => Ok(self.add(Task::event(args.description, args.from, args.to))),
            Command::Mark(number) => {
                let update = self.tasks.mark_done(number)?;
                let text = reply::task_marked(&update.task, update.changed);
                Ok(if update.changed {
                    self.save_tasks(text)
                } else {
                    text
                })
            }
            Command::Unmark(number) => {
                let update = self.tasks.mark_undone(number)?;
                let text = reply::task_unmarked(&update.task, update.changed);
                Ok(if update.changed {
                    self.save_tasks(text)
                } else {
                    text
                })
            }
            Command::Delete(number) => {
                let removed = self.tasks.delete(number)?;
                let text = reply::task_removed(&removed, self.tasks.len());
                Ok(self.save_tasks(text))
            }
            Command::Find(keyword) => Ok(reply::found_tasks(&self.tasks.find(&keyword))),
            Command::Alias(action) => self.alias(action),
        }
    }

    fn add(&mut self, task: Task) -> String {
        let text = reply::task_added(&task, self.tasks.len() + 1);
        self.tasks.add(task);
        self.save_tasks(text)
    }

    fn alias(&mut self, action: AliasAction) -> Result<String> {
        match action {
            AliasAction::Add { alias, command } => {
                let key = self.aliases.add_user_alias(&alias, command)?;
                Ok(self.save_aliases(reply::alias_added(&key, command)))
            }
            AliasAction::Remove { alias } => {
                let removed = self.aliases.remove_user_alias(&alias)?;
                Ok(self.save_aliases(reply::alias_removed(&removed.alias)))
            }
            AliasAction::List => Ok(reply::alias_list(self.aliases.user_aliases())),
        }
    }

    /// Persist the whole list. A failed save keeps the in-memory change and
    /// appends a warning to the reply.
    fn save_tasks(&self, text: String) -> String {
        match self.task_storage.save(&self.tasks) {
            Ok(()) => text,
            Err(err) => {
                warn!(error = %err, "task save failed");
                format!("{}\n{}", text, reply::save_warning("tasks", &err))
            }
        }
    }

    fn save_aliases(&self, text: String) -> String {
        match self.alias_storage.save(self.aliases.user_aliases()) {
            Ok(()) => text,
            Err(err) => {
                warn!(error = %err, "alias save failed");
                format!("{}\n{}", text, reply::save_warning("aliases", &err))
            }
        }
    }
}
