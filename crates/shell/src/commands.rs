use std::io::{self, Write};

use anyhow::Result;
use revel_core::Session;
use tracing::info;

use crate::cli::{CliCommand, ExecArgs};
use crate::config::AppConfig;
use crate::repl;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    let mut session = Session::open(config);
    match command {
        CliCommand::Chat => {
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), &mut writer)
        }
        CliCommand::Exec(args) => handle_exec(&mut session, &args, &mut writer),
    }
}

/// One-shot command. User errors are printed like any other reply.
fn handle_exec<W: Write>(session: &mut Session, args: &ExecArgs, mut writer: W) -> Result<()> {
    for warning in session.startup_warnings() {
        writeln!(writer, "{}", warning)?;
    }
    let reply = session.respond(&args.line());
    if reply.is_error() {
        info!(line = %args.line(), "exec rejected");
    }
    writeln!(writer, "{}", reply)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_config() -> (AppConfig, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf());
        (config, dir)
    }

    fn exec(config: &AppConfig, line: &str) -> String {
        let args = ExecArgs {
            words: line.split(' ').map(String::from).collect(),
        };
        let mut output = Vec::new();
        execute(config, CliCommand::Exec(args), &mut output).expect("execute exec");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn exec_persists_between_invocations() {
        let (config, _dir) = temp_config();
        exec(&config, "todo read book");
        exec(&config, "mark 1");

        assert_eq!(
            exec(&config, "list"),
            "Here are the tasks in your list:\n1.[T][X] read book\n"
        );
    }

    #[test]
    fn exec_prints_user_errors_as_replies() {
        let (config, _dir) = temp_config();
        let output = exec(&config, "delete 4");
        assert!(output.starts_with("Sorry, but there are no tasks in your list yet."));
    }
}
