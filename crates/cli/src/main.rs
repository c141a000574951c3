use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;
mod session;

use commands::Command;
use filecat_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "filecat",
    version,
    about = "Personal catalog of file metadata",
    propagate_version = true
)]
pub struct Cli {
    /// Log at debug level (overrides FILECAT_LOG_LEVEL when lower)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose).ok();

    match cli.command {
        Command::Search(args) => commands::search::run(args),
        Command::Import(args) => commands::import::run(args),
        Command::Shell(args) => commands::shell::run(args),
        Command::History(args) => commands::history::run(args),
    }
}
