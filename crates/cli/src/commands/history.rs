use std::process::ExitCode;

use clap::Args;
use filecat_runtime::history::HistoryStore;
use log::{error, info};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Clear all history
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: HistoryArgs) -> ExitCode {
    let Some(store) = HistoryStore::new() else {
        info!("history is disabled");
        println!("History is disabled.");
        return ExitCode::SUCCESS;
    };

    if args.clear {
        return match store.clear() {
            Ok(()) => {
                println!("History cleared");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("failed to clear history: {}", e);
                eprintln!("[error] failed to clear history: {e}");
                ExitCode::from(1)
            }
        };
    }

    let events = store.recent(args.limit);
    if events.is_empty() {
        println!("No history yet.");
        return ExitCode::SUCCESS;
    }

    println!("{:<20}  EVENT", "TIMESTAMP");
    println!("{}", "-".repeat(72));

    for event in &events {
        let ts = event.timestamp().format("%Y-%m-%d %H:%M:%S");
        println!("{:<20}  {}", ts.to_string(), event.describe());
    }

    let total = store.count();
    if total > args.limit {
        println!(
            "\n({} more entries, use --limit to show more)",
            total - args.limit
        );
    }

    ExitCode::SUCCESS
}
