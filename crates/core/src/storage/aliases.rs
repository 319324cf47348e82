use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::alias::{normalize_alias, AliasEntry, CommandId};
use crate::error::{Result, RevelError};

use super::{read_optional, write_replacing};

/// User aliases as a JSON object of `"alias": "command"` pairs, in file order.
#[derive(Debug, Default, PartialEq, Eq)]
struct AliasDocument(Vec<(String, String)>);

impl Serialize for AliasDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (alias, command) in &self.0 {
            map.serialize_entry(alias, command)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AliasDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = AliasDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping aliases to command names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, String)> = Vec::new();
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(AliasDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// The JSON alias file next to the task file.
#[derive(Debug, Clone)]
pub struct AliasStorage {
    path: PathBuf,
}

impl AliasStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load user aliases. A missing or blank file yields none; anything
    /// malformed, including two keys that normalize to the same alias, fails
    /// the whole load.
    pub fn load(&self) -> Result<Vec<AliasEntry>> {
        let contents = match read_optional(&self.path)? {
            Some(contents) if !contents.trim().is_empty() => contents,
            _ => {
                debug!(path = %self.path.display(), "no user aliases on disk");
                return Ok(Vec::new());
            }
        };

        let document: AliasDocument = serde_json::from_str(&contents)
            .map_err(|err| self.corrupt(err.to_string()))?;

        let mut entries: Vec<AliasEntry> = Vec::with_capacity(document.0.len());
        for (alias, command) in document.0 {
            let alias = normalize_alias(&alias)?;
            if entries.iter().any(|entry| entry.alias == alias) {
                return Err(self.corrupt(format!("duplicate alias '{}'", alias)));
            }
            let command = command.parse::<CommandId>().map_err(|_| {
                self.corrupt(format!("unknown command '{}' for alias '{}'", command, alias))
            })?;
            entries.push(AliasEntry::new(alias, command));
        }
        Ok(entries)
    }

    pub fn save(&self, aliases: &[AliasEntry]) -> Result<()> {
        let document = AliasDocument(
            aliases
                .iter()
                .map(|entry| (entry.alias.clone(), entry.command.as_str().to_string()))
                .collect(),
        );
        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|err| RevelError::StorageUnavailable(err.to_string()))?;
        json.push('\n');
        write_replacing(&self.path, &json)?;
        debug!(path = %self.path.display(), count = aliases.len(), "saved aliases");
        Ok(())
    }

    fn corrupt(&self, reason: String) -> RevelError {
        RevelError::corrupt(self.path.display().to_string(), reason)
    }
}
