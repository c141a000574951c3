use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result, bail};
use clap::Args;
use filecat_catalog::{Catalog, FileKind, FileRecord, summarize};
use filecat_runtime::{
    history::{HistoryStore, LifecycleAction, SearchEvent},
    today,
};
use log::info;

use crate::{
    commands::{SessionArgs, search::run_search},
    printer::{
        ColorChoice, HumanPrinter, OutputFormat, PrintContext, PrinterConfig, describe_record,
        print_records, write_report,
    },
    session::{import_logged, load_session},
};

const HELP: &str = "\
commands:
  search [query]                       e.g. search type:pdf tag:work sort:size
  list [archived]                      show live or archived records
  open <name>                          open a record
  archive <name>                       move a record to the archive
  delete <name>                        delete a record permanently (asks first)
  add <type> <name> <path> <created> <sizeKB> [tags...]
                                       type is one of txt, pdf, jpg, mp4, mp3;
                                       quote names or paths with spaces
  import <path>                        import records from a file
  touch <name> [date]                  set the modification date (default today)
  tag <name> <tag>                     add a tag
  report                               summary of all live records
  help                                 this text
  quit                                 leave the shell";

#[derive(Debug, Args)]
pub struct ShellArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn run(args: ShellArgs) -> ExitCode {
    let catalog = match load_session(&args.session) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("[error] {e:#}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog, stdin.lock(), stdout.lock(), HistoryStore::new());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub code: String,
    pub name: String,
    pub path: String,
    pub created: String,
    pub size_kb: u64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    List { archived: bool },
    Open(String),
    Archive(String),
    Delete(String),
    Add(NewRecord),
    Import(PathBuf),
    Touch { name: String, date: Option<String> },
    Tag { name: String, tag: String },
    Report,
    Help,
    Quit,
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest)
}

/// Split on whitespace, keeping double-quoted runs together.
fn split_args(rest: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quoted = false;

    for c in rest.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_arg = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            c => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if quoted {
        bail!("unterminated quote");
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}

fn parse_add(rest: &str) -> Result<NewRecord> {
    let parts = split_args(rest)?;
    let [code, name, path, created, size, tags @ ..] = parts.as_slice() else {
        bail!("usage: add <type> <name> <path> <created> <sizeKB> [tags...]");
    };

    let size_kb = size
        .parse::<u64>()
        .with_context(|| format!("size must be a whole number of KB, got `{size}`"))?;

    Ok(NewRecord {
        code: code.clone(),
        name: name.clone(),
        path: path.clone(),
        created: created.clone(),
        size_kb,
        tags: tags.to_vec(),
    })
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    let command = match cmd.to_ascii_lowercase().as_str() {
        "search" | "find" => ShellCommand::Search(rest.to_owned()),
        "list" | "ls" => match rest {
            "" => ShellCommand::List { archived: false },
            "archived" => ShellCommand::List { archived: true },
            _ => bail!("usage: list [archived]"),
        },
        "open" => ShellCommand::Open(required(rest, "open <name>")?.to_owned()),
        "archive" => ShellCommand::Archive(required(rest, "archive <name>")?.to_owned()),
        "delete" | "rm" => ShellCommand::Delete(required(rest, "delete <name>")?.to_owned()),
        "add" => ShellCommand::Add(parse_add(rest)?),
        "import" => ShellCommand::Import(PathBuf::from(required(rest, "import <path>")?)),
        "touch" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
            [name] => ShellCommand::Touch {
                name: (*name).to_owned(),
                date: None,
            },
            [name, date] => ShellCommand::Touch {
                name: (*name).to_owned(),
                date: Some((*date).to_owned()),
            },
            _ => bail!("usage: touch <name> [date]"),
        },
        "tag" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
            [name, tag] => ShellCommand::Tag {
                name: (*name).to_owned(),
                tag: (*tag).to_owned(),
            },
            _ => bail!("usage: tag <name> <tag>"),
        },
        "report" => ShellCommand::Report,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => bail!("unknown command `{other}`, type `help` for a list"),
    };

    Ok(Some(command))
}

/// Line-oriented session over any reader and writer.
///
/// All prompting lives here; the catalog only sees already-validated input
/// and an explicit delete confirmation.
pub struct Shell<R, W> {
    catalog: Catalog,
    input: R,
    out: W,
    history: Option<HistoryStore>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, input: R, out: W, history: Option<HistoryStore>) -> Self {
        Self {
            catalog,
            input,
            out,
            history,
        }
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only output
    /// errors end the session.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "filecat shell: {} records loaded, type `help` for commands",
            self.catalog.len()
        )?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => {
                    if let Err(e) = self.execute(command) {
                        writeln!(self.out, "error: {e:#}")?;
                    }
                }
                Err(e) => writeln!(self.out, "error: {e}")?,
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.out, "{question} (y/n): ")?;
        self.out.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().chars().next(), Some('y' | 'Y')))
    }

    fn log_lifecycle(&self, action: LifecycleAction, name: &str) {
        info!("{} {}", action.as_str(), name);
        if let Some(store) = &self.history {
            store.log_lifecycle(action, name);
        }
    }

    fn execute(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Search(query) => self.search(&query)?,
            ShellCommand::List { archived } => self.list(archived)?,
            ShellCommand::Open(name) => {
                let description = self.catalog.open(&name)?;
                writeln!(self.out, "{description}")?;
            }
            ShellCommand::Archive(name) => {
                self.catalog.archive(&name)?;
                writeln!(self.out, "archived {name}")?;
                self.log_lifecycle(LifecycleAction::Archived, &name);
            }
            ShellCommand::Delete(name) => self.delete(&name)?,
            ShellCommand::Add(new) => {
                let kind = FileKind::from_code(&new.code)?;
                let record =
                    FileRecord::new(kind, &new.name, new.path, new.created, new.size_kb, new.tags)?;
                self.catalog.add(record);
                writeln!(self.out, "added {} as {}", new.name, kind)?;
            }
            ShellCommand::Import(path) => {
                let summary = import_logged(&mut self.catalog, &path)?;
                for (line, err) in &summary.errors {
                    writeln!(self.out, "line {line}: {err}")?;
                }
                writeln!(
                    self.out,
                    "imported {} records from {} ({} skipped, {} rejected)",
                    summary.imported,
                    path.display(),
                    summary.skipped,
                    summary.errors.len()
                )?;
                self.log_lifecycle(LifecycleAction::Imported, &path.display().to_string());
            }
            ShellCommand::Touch { name, date } => {
                let date = date.unwrap_or_else(today);
                self.catalog.set_modification_date(&name, &date)?;
                writeln!(self.out, "{name} modified on {date}")?;
            }
            ShellCommand::Tag { name, tag } => {
                self.catalog.add_tag(&name, &tag)?;
                writeln!(self.out, "tagged {name} with {tag}")?;
            }
            ShellCommand::Report => {
                let report = summarize(self.catalog.all_live());
                write_report(&mut self.out, &report)?;
            }
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => {}
        }

        Ok(())
    }

    fn search(&mut self, query: &str) -> Result<()> {
        let started = Instant::now();
        let outcome = run_search(&self.catalog, query, None)?;
        let elapsed = started.elapsed();
        let total = outcome.hits.len();

        let cfg = PrinterConfig {
            format: OutputFormat::Human,
            color: ColorChoice::Never,
            limit: total,
            show_report: true,
        };
        let ctx = PrintContext {
            kind: "search",
            query: Some(query),
            total,
            truncated: false,
            report: Some(&outcome.report),
        };

        let mut printer = HumanPrinter::new(&mut self.out, io::sink(), cfg);
        print_records(&mut printer, &outcome.hits, &ctx, total)?;

        if let Some(store) = &self.history {
            let duration_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            store.log_search(SearchEvent::new(query.to_owned(), total, duration_ms));
        }
        Ok(())
    }

    fn list(&mut self, archived: bool) -> Result<()> {
        let records = if archived {
            self.catalog.all_archived()
        } else {
            self.catalog.all_live()
        };

        if records.is_empty() {
            writeln!(self.out, "(empty)")?;
        }
        for record in records {
            writeln!(self.out, "{}", describe_record(record.name(), record))?;
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        // Unconfirmed delete changes nothing; it only reports a missing name.
        self.catalog.delete(name, false)?;

        let confirmed = self.confirm(&format!("delete {name}?"))?;
        match self.catalog.delete(name, confirmed)? {
            Some(_) => {
                writeln!(self.out, "deleted {name}")?;
                self.log_lifecycle(LifecycleAction::Deleted, name);
            }
            None => writeln!(self.out, "kept {name}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
