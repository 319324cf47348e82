mod aliases;
mod tasks;

pub use aliases::AliasStorage;
pub use tasks::TaskStorage;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::RevelError;

/// Read a whole file; `Ok(None)` when it does not exist yet.
fn read_optional(path: &Path) -> Result<Option<String>, RevelError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(unavailable(path, err)),
    }
}

/// Replace the file contents, creating parent directories first.
fn write_replacing(path: &Path, contents: &str) -> Result<(), RevelError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| unavailable(parent, err))?;
    }
    fs::write(path, contents).map_err(|err| unavailable(path, err))
}

fn unavailable(path: &Path, err: io::Error) -> RevelError {
    RevelError::StorageUnavailable(format!("{}: {}", path.display(), err))
}
