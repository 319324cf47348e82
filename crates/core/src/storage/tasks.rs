use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::error::Result;
use crate::model::{Task, TaskList};

use super::{read_optional, write_replacing};

/// The flat task file: one encoded task per line.
#[derive(Debug, Clone)]
pub struct TaskStorage {
    path: PathBuf,
}

impl TaskStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every task. A missing file is an empty list; any record that does
    /// not decode fails the whole load.
    pub fn load(&self) -> Result<Vec<Task>> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no task file yet");
            return Ok(Vec::new());
        };

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(codec::decode)
            .collect()
    }

    /// Rewrite the file so it holds exactly the given tasks.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut contents = String::new();
        for task in tasks.iter() {
            contents.push_str(&codec::encode(task));
            contents.push('\n');
        }
        write_replacing(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
