use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use revel_core::reply;
use revel_core::Session;
use tracing::debug;

const SEPARATOR: &str = "____________________________________________________________";

/// Converse over `input`/`output` until an exit reply or end of input.
/// Bytes that are not UTF-8 are replaced rather than ending the conversation.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut output: W) -> Result<()> {
    for warning in session.startup_warnings() {
        write_framed(&mut output, warning)?;
    }
    write_framed(&mut output, &reply::greeting())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input line")?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let reply = session.respond(line.trim_end_matches(['\n', '\r']));
        write_framed(&mut output, &reply.text)?;
        if reply.is_exit {
            debug!("conversation ended by user");
            return Ok(());
        }
    }

    debug!("input closed");
    Ok(())
}

fn write_framed<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output, "{}", text)?;
    writeln!(output, "{}", SEPARATOR)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use revel_core::AppConfig;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn converse_bytes(dir: &TempDir, script: &[u8]) -> (Session, String) {
        let config = AppConfig::from_data_dir(dir.path().to_path_buf());
        let mut session = Session::open(&config);
        let mut output = Vec::new();
        run(&mut session, Cursor::new(script.to_vec()), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    fn converse(dir: &TempDir, script: &str) -> String {
        converse_bytes(dir, script.as_bytes()).1
    }

    #[test]
    fn greets_then_frames_each_reply() {
        let dir = TempDir::new().unwrap();
        let output = converse(&dir, "todo read book\nbye\nlist\n");

        let expected = format!(
            "{sep}\nHello! I'm Revel\nWhat can I do for you?\n{sep}\n\
             {sep}\nGot it. I've added this task:\n  [T][ ] read book\nNow you have 1 task in the list.\n{sep}\n\
             {sep}\nBye. Hope to see you again soon!\n{sep}\n",
            sep = SEPARATOR
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn errors_are_replies_and_eof_ends_quietly() {
        let dir = TempDir::new().unwrap();
        let output = converse(&dir, "mark 1\nfly");
        assert!(output.contains("there are no tasks in your list yet."));
        assert!(output.contains("I don't know what 'fly' means."));
        assert!(!output.contains("Bye."));
    }

    #[test]
    fn startup_warning_precedes_greeting() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tasks.txt"), "garbage\n").unwrap();
        let output = converse(&dir, "");
        let warning = output.find("Loading error occurred!").unwrap();
        let greeting = output.find("Hello! I'm Revel").unwrap();
        assert!(warning < greeting);
    }

    #[test]
    fn invalid_utf8_line_does_not_end_conversation() {
        let dir = TempDir::new().unwrap();
        let (session, output) = converse_bytes(&dir, b"todo caf\xe9\ntodo next\r\nlist\n");

        assert_eq!(session.tasks().len(), 2);
        assert_eq!(session.tasks().get(1).unwrap().description(), "caf\u{FFFD}");
        assert_eq!(session.tasks().get(2).unwrap().description(), "next");
        assert!(output.contains("2.[T][ ] next"));
    }
}
