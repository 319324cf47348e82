use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = revel::cli::Cli::parse();
    revel::logging::init(cli.log_filter.as_deref())?;

    let config = revel::config::from_cli(&cli)?;
    let command = cli.command.clone().unwrap_or(revel::cli::CliCommand::Chat);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    revel::commands::execute(&config, command, &mut handle)?;

    Ok(())
}
