pub mod history;
pub mod import;
pub mod search;
pub mod shell;

use std::{
    io::{Stderr, Stdout},
    path::PathBuf,
};

use clap::{Args, Subcommand};
pub use history::HistoryArgs;
pub use import::ImportArgs;
pub use search::SearchArgs;
pub use shell::ShellArgs;

use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, OutputFormat, PrinterConfig, RecordPrinter,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog and print matching records with a summary.
    ///
    /// Example:
    ///   filecat search --samples 'type:ImageFile size:>=1000 size:<=2000'
    ///   filecat search --import files.txt 'tag:work sort:size'
    Search(SearchArgs),

    /// Parse an import file and show what it would add, without keeping it.
    Import(ImportArgs),

    /// Interactive session: search, open, archive, delete, add and import.
    Shell(ShellArgs),

    /// Show past searches and catalog changes.
    History(HistoryArgs),
}

/// Where the session catalog comes from.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Import records from a file (repeatable)
    #[arg(long = "import", short = 'i', value_name = "FILE")]
    pub imports: Vec<PathBuf>,

    /// Start with the built-in sample records
    #[arg(long)]
    pub samples: bool,

    /// Do not load the default catalog file
    #[arg(long)]
    pub no_catalog: bool,
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress the summary report
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn make_printer(&self, limit: usize) -> Box<dyn RecordPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let cfg = PrinterConfig {
            format,
            color: ColorChoice::from_flag(&self.color),
            limit,
            show_report: !self.quiet,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}
