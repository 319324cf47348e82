use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

static TASKS_FILE_NAME: &str = "tasks.txt";
static ALIASES_FILE_NAME: &str = "aliases.json";
static ENV_DATA_DIR: &str = "REVEL_DATA_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "revel", "revel"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    tasks_path: PathBuf,
    aliases_path: PathBuf,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory using the provided override,
    /// environment variables, and platform defaults.
    pub fn discover(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        Ok(Self::from_data_dir(data_dir))
    }

    /// Construct [`AppConfig`] directly from a resolved data directory.
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        let tasks_path = data_dir.join(TASKS_FILE_NAME);
        let aliases_path = data_dir.join(ALIASES_FILE_NAME);
        Self {
            data_dir,
            tasks_path,
            aliases_path,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    pub fn aliases_path(&self) -> &Path {
        &self.aliases_path
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dev_dir = manifest_dir.join("..").join("tmp").join("dev-revel");
        return Ok(dev_dir);
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".revel"));
    }

    Ok(env::current_dir()?.join(".revel"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn data_files_live_in_data_dir() {
        let config = AppConfig::from_data_dir(PathBuf::from("/tmp/revel-test"));
        assert_eq!(config.tasks_path(), Path::new("/tmp/revel-test/tasks.txt"));
        assert_eq!(
            config.aliases_path(),
            Path::new("/tmp/revel-test/aliases.json")
        );
    }

    #[test]
    fn discover_creates_override_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");
        let config = AppConfig::discover(Some(dir.clone())).unwrap();
        assert!(dir.is_dir());
        assert_eq!(config.data_dir(), dir.as_path());
    }
}
