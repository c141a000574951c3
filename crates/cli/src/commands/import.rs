use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use filecat_catalog::{Catalog, FileRecord, import_path, summarize};

use crate::{
    commands::OutputOptions,
    printer::{PrintContext, print_records},
};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File in `name,path,creationDate,size,tags...` format
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ImportArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ImportArgs) -> Result<ExitCode> {
    let mut catalog = Catalog::new();
    let summary = import_path(&mut catalog, &args.file)
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    let records: Vec<&FileRecord> = catalog.all_live().iter().collect();
    let report = summarize(records.iter().copied());
    let ctx = PrintContext {
        kind: "import",
        query: None,
        total: records.len(),
        truncated: false,
        report: Some(&report),
    };

    let mut printer = args.output.make_printer(records.len());
    print_records(printer.as_mut(), &records, &ctx, records.len())?;

    for (line, err) in &summary.errors {
        eprintln!("[import] {}:{}: {}", args.file.display(), line, err);
    }
    eprintln!(
        "[import] {} records, {} skipped, {} rejected",
        summary.imported,
        summary.skipped,
        summary.errors.len()
    );

    if summary.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
