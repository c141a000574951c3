use std::{process::ExitCode, time::Instant};

use anyhow::Result;
use clap::Args;
use filecat_catalog::{
    Catalog, FileRecord, Report, parse_search, search, sort_by_key_name, summarize,
};
use filecat_runtime::{
    DEFAULT_SORT_KEY,
    history::{HistoryStore, SearchEvent},
};
use log::{debug, warn};

use crate::{
    commands::{OutputOptions, SessionArgs},
    printer::{PrintContext, print_records},
    session::load_session,
};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Criteria such as 'type:ImageFile tag:work size:>=1000 sort:size'
    #[arg(default_value = "")]
    pub query: String,

    /// Sort key: name, creationDate or size (overrides `sort:` in the query)
    #[arg(long, short = 's')]
    pub sort: Option<String>,

    /// Maximum number of records to display
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: SearchArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Sorted hits and their summary.
pub struct SearchOutcome<'a> {
    pub hits: Vec<&'a FileRecord>,
    pub report: Report,
}

/// Search, sort and summarize. `sort_override` wins over the query's `sort:`.
pub fn run_search<'a>(
    catalog: &'a Catalog,
    query: &str,
    sort_override: Option<&str>,
) -> Result<SearchOutcome<'a>> {
    let request = parse_search(query)?;
    let mut hits = search(catalog, &request.criteria);

    let key = sort_override
        .or(request.sort.as_deref())
        .unwrap_or(DEFAULT_SORT_KEY);
    if !sort_by_key_name(&mut hits, key) {
        warn!("unknown sort key `{key}`, keeping catalog order");
    }

    let report = summarize(hits.iter().copied());
    Ok(SearchOutcome { hits, report })
}

fn execute(args: SearchArgs) -> Result<ExitCode> {
    let catalog = load_session(&args.session)?;

    let started = Instant::now();
    let outcome = run_search(&catalog, &args.query, args.sort.as_deref())?;
    let elapsed = started.elapsed();
    debug!(
        "search {:?} matched {} of {} records in {:?}",
        args.query,
        outcome.hits.len(),
        catalog.len(),
        elapsed
    );

    let total = outcome.hits.len();
    let ctx = PrintContext {
        kind: "search",
        query: Some(args.query.as_str()),
        total,
        truncated: total > args.limit,
        report: Some(&outcome.report),
    };

    let mut printer = args.output.make_printer(args.limit);
    print_records(printer.as_mut(), &outcome.hits, &ctx, args.limit)?;

    if let Some(store) = HistoryStore::new() {
        let duration_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        store.log_search(SearchEvent::new(args.query.clone(), total, duration_ms));
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
