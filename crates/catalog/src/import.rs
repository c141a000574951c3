use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    catalog::Catalog,
    error::{CatalogError, ParseError},
    record::{FileRecord, classify},
};

/// Fields before the free-form tag tail.
const FIXED_FIELDS: usize = 4;

const KB_PER_MB: u64 = 1024;

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Blank lines and names with no known extension
    pub skipped: usize,
    /// 1-based line number and the reason it was rejected
    pub errors: Vec<(usize, ParseError)>,
}

impl ImportSummary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse `<integer>KB` or `<integer>MB` into kilobytes.
///
/// The unit is located anywhere in the field, `KB` before `MB`, and everything
/// before it must be an integer once trimmed.
pub fn parse_size_kb(field: &str) -> Result<u64, ParseError> {
    let (number, factor) = if let Some(pos) = field.find("KB") {
        (&field[..pos], 1)
    } else if let Some(pos) = field.find("MB") {
        (&field[..pos], KB_PER_MB)
    } else {
        return Err(ParseError::UnknownSizeUnit);
    };

    let value: u64 = number
        .trim()
        .parse()
        .map_err(|_| ParseError::MalformedLine)?;

    value
        .checked_mul(factor)
        .ok_or(ParseError::MalformedLine)
}

/// Split the tag tail on commas. Always yields at least one tag, so an empty
/// tail becomes a single empty tag.
fn split_tags(tail: &str) -> Vec<String> {
    tail.split(',').map(str::to_owned).collect()
}

/// Turn one `name,path,creationDate,size,tags...` line into a record.
///
/// Returns `Ok(None)` when the name carries no known extension marker; such
/// lines are skipped rather than rejected. Fields are taken verbatim, no
/// trimming or unquoting.
pub fn parse_line(line: &str) -> Result<Option<FileRecord>, ParseError> {
    let mut fields = line.splitn(FIXED_FIELDS + 1, ',');

    let name = fields.next().unwrap_or_default();
    let Some(kind) = classify(name) else {
        return Ok(None);
    };

    let (Some(path), Some(created), Some(size)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::MalformedLine);
    };
    // A missing tail reads as empty, same as a trailing comma.
    let tail = fields.next().unwrap_or_default();

    let size_kb = parse_size_kb(size)?;

    FileRecord::new(kind, name, path, created, size_kb, split_tags(tail))
        .map(Some)
        .map_err(|_| ParseError::MalformedLine)
}

/// Import every line of `reader` into `catalog`, in order.
///
/// Bad lines are collected in the summary and do not stop the import. An I/O
/// error stops it; records read before the error stay in the catalog.
pub fn import_reader<R: BufRead>(catalog: &mut Catalog, reader: R) -> io::Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        match parse_line(&line) {
            Ok(Some(record)) => {
                catalog.add(record);
                summary.imported += 1;
            }
            Ok(None) => summary.skipped += 1,
            Err(e) => summary.errors.push((idx + 1, e)),
        }
    }

    Ok(summary)
}

pub fn import_path(catalog: &mut Catalog, path: &Path) -> Result<ImportSummary, CatalogError> {
    let io_err = |source: io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    import_reader(catalog, BufReader::new(file)).map_err(io_err)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
