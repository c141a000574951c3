mod catalog;
mod dsl;
mod error;
mod import;
mod query;
mod record;
mod report;
mod samples;

pub use catalog::Catalog;
pub use dsl::{CriteriaError, SearchRequest, parse_search};
pub use error::{CatalogError, ParseError};
pub use import::{ImportSummary, import_path, import_reader, parse_line, parse_size_kb};
pub use query::{Criteria, SortKey, search, sort, sort_by_key_name};
pub use record::{FileKind, FileRecord, classify};
pub use report::{Report, summarize};
pub use samples::sample_records;
