use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "revel",
    version,
    about = "A conversational task assistant for todos, deadlines and events.",
    after_help = "Examples:\n  revel                         Start a conversation (same as `revel chat`)\n  revel exec todo read book\n  revel exec deadline return book /by 2/12/2019 1800\n  revel --log debug exec list"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter written to stderr (e.g. "info", "revel_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Read commands from stdin one line at a time (default command)
    Chat,
    /// Run a single command line and print the reply
    Exec(ExecArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
    /// Command word followed by its arguments, exactly as typed in chat
    #[arg(value_name = "WORDS", required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl ExecArgs {
    pub fn line(&self) -> String {
        self.words.join(" ")
    }
}
