use crate::error::{Result, RevelError};

/// A raw input line split into its leading command word and the trimmed rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub command: &'a str,
    pub args: &'a str,
}

pub fn split_command_and_args(line: &str) -> Result<CommandLine<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(RevelError::EmptyInput);
    }

    let (command, args) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    Ok(CommandLine { command, args })
}

/// Text before the first `delimiter`, trimmed.
pub fn extract_before<'a>(text: &'a str, delimiter: &str) -> Result<&'a str> {
    let start = locate(text, delimiter)?;
    Ok(text[..start].trim())
}

/// Text after the end of the first `delimiter`, trimmed.
pub fn extract_after<'a>(text: &'a str, delimiter: &str) -> Result<&'a str> {
    let start = locate(text, delimiter)?;
    Ok(text[start + delimiter.len()..].trim())
}

/// Text strictly between the first `start` and the first `end` that follows it.
pub fn extract_between<'a>(text: &'a str, start: &str, end: &str) -> Result<&'a str> {
    let from = locate(text, start)? + start.len();
    let to = text[from..]
        .find(end)
        .map(|offset| from + offset)
        .ok_or_else(|| RevelError::DelimiterNotFound(end.to_string()))?;
    Ok(text[from..to].trim())
}

fn locate(text: &str, delimiter: &str) -> Result<usize> {
    text.find(delimiter)
        .ok_or_else(|| RevelError::DelimiterNotFound(delimiter.to_string()))
}
