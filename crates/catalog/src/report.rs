use serde::Serialize;

use crate::record::FileRecord;

/// Aggregate statistics over a result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub count: usize,
    pub total_size_kb: u64,
    /// Floor of `total_size_kb / count`, zero for an empty set
    pub average_size_kb: u64,
    /// Lexicographic maximum of the modification dates, empty if none are set
    pub last_modification_date: String,
}

pub fn summarize<'a, I>(records: I) -> Report
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let mut count = 0usize;
    let mut total_size_kb = 0u64;
    let mut last = "";

    for record in records {
        count += 1;
        total_size_kb = total_size_kb.saturating_add(record.size_kb());
        if record.modification_date() > last {
            last = record.modification_date();
        }
    }

    let average_size_kb = match count {
        0 => 0,
        n => total_size_kb / n as u64,
    };

    Report {
        count,
        total_size_kb,
        average_size_kb,
        last_modification_date: last.to_owned(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
