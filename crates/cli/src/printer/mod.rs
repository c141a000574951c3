use std::io::{self, Write};

use filecat_catalog::{FileRecord, Report};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_flag(value: &str) -> ColorChoice {
        match value {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Maximum number of rows to print.
    pub limit: usize,
    /// Whether to print the summary report after the rows.
    pub show_report: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            limit: 50,
            show_report: true,
        }
    }
}

/// Static context about a print run.
#[derive(Debug)]
pub struct PrintContext<'a> {
    /// Label for this run, e.g. `search` or `import`
    pub kind: &'a str,
    pub query: Option<&'a str>,
    /// Rows before the limit was applied
    pub total: usize,
    pub truncated: bool,
    pub report: Option<&'a Report>,
}

/// One row in the result stream.
#[derive(Debug)]
pub struct RecordRow<'a> {
    /// 1-based position in the sorted results.
    pub rank: usize,
    pub record: &'a FileRecord,
}

/// Receives a stream of rows plus context and formats them.
pub trait RecordPrinter {
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()>;

    fn print_row(&mut self, row: &RecordRow<'_>, ctx: &PrintContext) -> io::Result<()>;

    /// Footers and the summary report.
    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()>;
}

/// Print `records` (already sorted) through `printer`, honouring the limit.
pub fn print_records(
    printer: &mut dyn RecordPrinter,
    records: &[&FileRecord],
    ctx: &PrintContext,
    limit: usize,
) -> io::Result<()> {
    printer.begin(ctx)?;
    for (i, record) in records.iter().copied().take(limit).enumerate() {
        let row = RecordRow { rank: i + 1, record };
        printer.print_row(&row, ctx)?;
    }
    printer.finish(ctx)
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// Generic writers cannot be probed for a TTY, so `Auto` means no color.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
            use_color,
        }
    }

    #[inline]
    fn format_name(&self, name: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", name)
        } else {
            name.to_owned()
        }
    }
}

/// `name (created, size KB, path, tags: a b) [Kind]`, plus the modification
/// date when one is set.
pub fn describe_record(name: &str, record: &FileRecord) -> String {
    let mut line = format!(
        "{} ({}, {} KB, {}, tags: {})",
        name,
        record.creation_date(),
        record.size_kb(),
        record.path(),
        record.tags().join(" "),
    );
    if !record.modification_date().is_empty() {
        line.push_str(&format!(" modified {}", record.modification_date()));
    }
    line.push_str(&format!(" [{}]", record.kind()));
    line
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let last = match report.last_modification_date.as_str() {
        "" => "-",
        date => date,
    };
    writeln!(out, "files:         {}", report.count)?;
    writeln!(out, "total size:    {} KB", report.total_size_kb)?;
    writeln!(out, "average size:  {} KB", report.average_size_kb)?;
    writeln!(out, "last modified: {}", last)
}

impl<W: Write, E: Write> RecordPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if ctx.total == 0 {
            writeln!(self.err, "[{}] no matching records", ctx.kind)?;
        }
        Ok(())
    }

    fn print_row(&mut self, row: &RecordRow<'_>, _ctx: &PrintContext) -> io::Result<()> {
        let name = self.format_name(row.record.name());
        writeln!(self.out, "{}", describe_record(&name, row.record))
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if ctx.truncated {
            let remaining = ctx.total.saturating_sub(self.cfg.limit);
            writeln!(self.out, "... and {} more records", remaining)?;
        }

        if self.cfg.show_report
            && let Some(report) = ctx.report
        {
            writeln!(self.out)?;
            write_report(&mut self.out, report)?;
        }

        Ok(())
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }
}

impl<W: Write, E: Write> RecordPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &PrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &RecordRow<'_>, ctx: &PrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "query": ctx.query,
            "rank": row.rank,
            "record": row.record,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        if self.cfg.show_report
            && let Some(report) = ctx.report
        {
            let obj = serde_json::json!({
                "type": "report",
                "kind": ctx.kind,
                "query": ctx.query,
                "total": ctx.total,
                "truncated": ctx.truncated,
                "report": report,
            });
            writeln!(self.out, "{}", obj)?;
        } else if ctx.truncated {
            let obj = serde_json::json!({ "type": "truncated", "total": ctx.total });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
