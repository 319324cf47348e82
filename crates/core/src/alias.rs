use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RevelError};

/// The closed set of commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Hello,
    Bye,
    List,
    Todo,
    Deadline,
    Event,
    Mark,
    Unmark,
    Delete,
    Help,
    Find,
    Alias,
}

impl CommandId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Hello => "hello",
            CommandId::Bye => "bye",
            CommandId::List => "list",
            CommandId::Todo => "todo",
            CommandId::Deadline => "deadline",
            CommandId::Event => "event",
            CommandId::Mark => "mark",
            CommandId::Unmark => "unmark",
            CommandId::Delete => "delete",
            CommandId::Help => "help",
            CommandId::Find => "find",
            CommandId::Alias => "alias",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = RevelError;

    /// Canonical command names only; aliases go through [`AliasRegistry::resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(CommandId::Hello),
            "bye" => Ok(CommandId::Bye),
            "list" => Ok(CommandId::List),
            "todo" => Ok(CommandId::Todo),
            "deadline" => Ok(CommandId::Deadline),
            "event" => Ok(CommandId::Event),
            "mark" => Ok(CommandId::Mark),
            "unmark" => Ok(CommandId::Unmark),
            "delete" => Ok(CommandId::Delete),
            "help" => Ok(CommandId::Help),
            "find" => Ok(CommandId::Find),
            "alias" => Ok(CommandId::Alias),
            _ => Err(RevelError::UnknownCommand(s.trim().to_string())),
        }
    }
}

const BUILTIN_ALIASES: [(CommandId, &[&str]); 12] = [
    (CommandId::Hello, &["hello", "hi"]),
    (CommandId::Bye, &["bye", "exit", "bb"]),
    (CommandId::List, &["list", "tasks", "ls"]),
    (CommandId::Todo, &["todo", "t"]),
    (CommandId::Deadline, &["deadline", "dl"]),
    (CommandId::Event, &["event", "evt"]),
    (CommandId::Mark, &["mark", "tick"]),
    (CommandId::Unmark, &["unmark", "untick"]),
    (CommandId::Delete, &["delete", "del"]),
    (CommandId::Help, &["help", "h"]),
    (CommandId::Find, &["find"]),
    (CommandId::Alias, &["alias"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: String,
    pub command: CommandId,
}

impl AliasEntry {
    pub fn new(alias: impl Into<String>, command: CommandId) -> Self {
        Self {
            alias: alias.into(),
            command,
        }
    }
}

/// Maps alias words to commands. Built-in aliases are fixed; user aliases are
/// only ever installed as a complete set through [`AliasRegistry::replace_all`].
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    builtins: Vec<AliasEntry>,
    user: Vec<AliasEntry>,
    table: HashMap<String, CommandId>,
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasRegistry {
    pub fn new() -> Self {
        let builtins = BUILTIN_ALIASES
            .iter()
            .flat_map(|(command, words)| words.iter().map(|word| AliasEntry::new(*word, *command)))
            .collect();
        let mut registry = Self {
            builtins,
            user: Vec::new(),
            table: HashMap::new(),
        };
        registry.publish();
        registry
    }

    pub fn resolve(&self, token: &str) -> Result<CommandId> {
        let key = token.trim().to_lowercase();
        self.table
            .get(&key)
            .copied()
            .ok_or_else(|| RevelError::UnknownCommand(token.trim().to_string()))
    }

    pub fn is_builtin(&self, alias: &str) -> bool {
        let key = alias.trim().to_lowercase();
        self.builtins.iter().any(|entry| entry.alias == key)
    }

    /// Insert or overwrite a user alias and republish the whole table.
    /// Returns the normalized alias.
    pub fn add_user_alias(&mut self, alias: &str, command: CommandId) -> Result<String> {
        let key = self.validate_user_alias(alias)?;
        let mut next = self.user.clone();
        match next.iter_mut().find(|entry| entry.alias == key) {
            Some(existing) => existing.command = command,
            None => next.push(AliasEntry::new(key.clone(), command)),
        }
        self.replace_all(next)?;
        Ok(key)
    }

    pub fn remove_user_alias(&mut self, alias: &str) -> Result<AliasEntry> {
        let key = normalize_alias(alias)?;
        if self.is_builtin(&key) {
            return Err(RevelError::ReservedAlias(key));
        }
        let mut next = self.user.clone();
        let position = next
            .iter()
            .position(|entry| entry.alias == key)
            .ok_or_else(|| RevelError::UnknownAlias(key.clone()))?;
        let removed = next.remove(position);
        self.replace_all(next)?;
        Ok(removed)
    }

    /// Every registered alias, built-ins first, each group in registration order.
    pub fn list_aliases(&self) -> Vec<(&str, CommandId)> {
        self.builtins
            .iter()
            .chain(self.user.iter())
            .map(|entry| (entry.alias.as_str(), entry.command))
            .collect()
    }

    pub fn user_aliases(&self) -> &[AliasEntry] {
        &self.user
    }

    /// Discard every user alias and install `aliases` instead. Nothing changes
    /// unless every entry is valid; a repeated alias keeps its last mapping.
    pub fn replace_all<I>(&mut self, aliases: I) -> Result<()>
    where
        I: IntoIterator<Item = AliasEntry>,
    {
        let mut next: Vec<AliasEntry> = Vec::new();
        for entry in aliases {
            let key = self.validate_user_alias(&entry.alias)?;
            match next.iter_mut().find(|existing| existing.alias == key) {
                Some(existing) => existing.command = entry.command,
                None => next.push(AliasEntry::new(key, entry.command)),
            }
        }
        self.user = next;
        self.publish();
        Ok(())
    }

    /// Comma separated alias words for the help screen.
    pub fn help_text(&self) -> String {
        self.list_aliases()
            .into_iter()
            .map(|(alias, _)| alias)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate_user_alias(&self, alias: &str) -> Result<String> {
        let key = normalize_alias(alias)?;
        if self.is_builtin(&key) {
            return Err(RevelError::ReservedAlias(key));
        }
        Ok(key)
    }

    fn publish(&mut self) {
        self.table = self
            .builtins
            .iter()
            .chain(self.user.iter())
            .map(|entry| (entry.alias.clone(), entry.command))
            .collect();
    }
}

/// Lowercase and check that the alias is a single non-empty word.
pub fn normalize_alias(raw: &str) -> Result<String> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return Err(RevelError::InvalidAlias(key));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn resolve_is_case_insensitive() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("BYE").unwrap(), CommandId::Bye);
        assert_eq!(registry.resolve("bye").unwrap(), CommandId::Bye);
        assert_eq!(registry.resolve("Exit").unwrap(), CommandId::Bye);
        assert_eq!(registry.resolve("dl").unwrap(), CommandId::Deadline);
    }

    #[test]
    fn unknown_token_fails_with_help_hint() {
        let registry = AliasRegistry::new();
        let err = registry.resolve("blah").unwrap_err();
        assert_eq!(err, RevelError::UnknownCommand("blah".into()));
        assert!(err.to_string().contains("help"));
    }

    #[rstest]
    #[case("hi")]
    #[case("exit")]
    #[case("LS")]
    #[case("find")]
    #[case("alias")]
    fn builtins_are_reserved(#[case] alias: &str) {
        let mut registry = AliasRegistry::new();
        assert!(matches!(
            registry.add_user_alias(alias, CommandId::Todo),
            Err(RevelError::ReservedAlias(_))
        ));
        assert!(matches!(
            registry.remove_user_alias(alias),
            Err(RevelError::ReservedAlias(_))
        ));
    }

    #[test]
    fn user_alias_round_trip() {
        let mut registry = AliasRegistry::new();
        let key = registry.add_user_alias("X", CommandId::Todo).unwrap();
        assert_eq!(key, "x");
        assert_eq!(registry.resolve("x").unwrap(), CommandId::Todo);

        registry.add_user_alias("x", CommandId::List).unwrap();
        assert_eq!(registry.resolve("X").unwrap(), CommandId::List);
        assert_eq!(registry.user_aliases().len(), 1);

        let removed = registry.remove_user_alias("x").unwrap();
        assert_eq!(removed, AliasEntry::new("x", CommandId::List));
        assert!(registry.resolve("x").is_err());
        assert_eq!(
            registry.remove_user_alias("x"),
            Err(RevelError::UnknownAlias("x".into()))
        );
    }

    #[rstest]
    #[case("")]
    #[case("two words")]
    fn rejects_invalid_aliases(#[case] alias: &str) {
        let mut registry = AliasRegistry::new();
        assert!(matches!(
            registry.add_user_alias(alias, CommandId::Todo),
            Err(RevelError::InvalidAlias(_))
        ));
    }

    #[test]
    fn replace_all_is_all_or_nothing() {
        let mut registry = AliasRegistry::new();
        registry
            .replace_all(vec![AliasEntry::new("a", CommandId::Todo)])
            .unwrap();

        let result = registry.replace_all(vec![
            AliasEntry::new("b", CommandId::List),
            AliasEntry::new("ls", CommandId::Todo),
        ]);
        assert_eq!(result, Err(RevelError::ReservedAlias("ls".into())));
        assert_eq!(registry.resolve("a").unwrap(), CommandId::Todo);
        assert!(registry.resolve("b").is_err());

        registry
            .replace_all(vec![AliasEntry::new("b", CommandId::List)])
            .unwrap();
        assert!(registry.resolve("a").is_err());
        assert_eq!(registry.resolve("b").unwrap(), CommandId::List);
    }

    #[test]
    fn listing_keeps_registration_order() {
        let mut registry = AliasRegistry::new();
        registry.add_user_alias("zz", CommandId::Find).unwrap();
        registry.add_user_alias("aa", CommandId::Find).unwrap();

        let listed = registry.list_aliases();
        assert_eq!(listed.first(), Some(&("hello", CommandId::Hello)));
        assert_eq!(
            &listed[listed.len() - 2..],
            &[("zz", CommandId::Find), ("aa", CommandId::Find)]
        );
        assert!(registry.help_text().starts_with("hello, hi, bye, exit, bb"));
    }

    #[test]
    fn canonical_names_parse() {
        assert_eq!("TODO".parse::<CommandId>().unwrap(), CommandId::Todo);
        assert!("t".parse::<CommandId>().is_err());
    }
}
