use std::cmp::Ordering;

use crate::{
    catalog::Catalog,
    record::{FileKind, FileRecord},
};

/// Conjunction of optional predicates. Unset fields always match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub kind: Option<FileKind>,
    /// Exact tag match
    pub tag: Option<String>,
    /// Inclusive lower bound
    pub min_size_kb: u64,
    /// Inclusive upper bound
    pub max_size_kb: u64,
    /// Exact string match on the creation date
    pub created: Option<String>,
    /// Exact string match on the modification date
    pub modified: Option<String>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            kind: None,
            tag: None,
            min_size_kb: 0,
            max_size_kb: u64::MAX,
            created: None,
            modified: None,
        }
    }
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: FileKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_size_range(mut self, min_kb: u64, max_kb: u64) -> Self {
        self.min_size_kb = min_kb;
        self.max_size_kb = max_kb;
        self
    }

    pub fn with_created(mut self, date: impl Into<String>) -> Self {
        self.created = Some(date.into());
        self
    }

    pub fn with_modified(mut self, date: impl Into<String>) -> Self {
        self.modified = Some(date.into());
        self
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        if let Some(kind) = self.kind
            && record.kind() != kind
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !record.has_tag(tag)
        {
            return false;
        }

        let size = record.size_kb();
        if size < self.min_size_kb || size > self.max_size_kb {
            return false;
        }

        if let Some(created) = &self.created
            && record.creation_date() != created
        {
            return false;
        }

        if let Some(modified) = &self.modified
            && record.modification_date() != modified
        {
            return false;
        }

        true
    }
}

/// Live records matching `criteria`, in insertion order.
///
/// Archived records are never returned.
pub fn search<'a>(catalog: &'a Catalog, criteria: &Criteria) -> Vec<&'a FileRecord> {
    catalog
        .all_live()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    /// Lexicographic on the raw `DD.MM.YYYY` string, so it does not follow
    /// calendar order across months or years.
    CreationDate,
    SizeKb,
}

impl SortKey {
    /// Resolve a user-facing key name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<SortKey> {
        match name {
            "name" => Some(SortKey::Name),
            "creationDate" | "created" => Some(SortKey::CreationDate),
            "sizeKB" | "size" => Some(SortKey::SizeKb),
            _ => None,
        }
    }

    fn compare(self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::CreationDate => a.creation_date().cmp(b.creation_date()),
            SortKey::SizeKb => a.size_kb().cmp(&b.size_kb()),
        }
    }
}

/// Stable ascending sort.
pub fn sort(records: &mut [&FileRecord], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
}

/// Sort by a key name; an unrecognized name leaves `records` untouched.
///
/// Returns whether a sort was applied.
pub fn sort_by_key_name(records: &mut [&FileRecord], name: &str) -> bool {
    match SortKey::from_name(name) {
        Some(key) => {
            sort(records, key);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
