use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a single import line could not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed line")]
    MalformedLine,

    #[error("size has no KB or MB unit")]
    UnknownSizeUnit,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("unrecognized file type: {0}")]
    UnrecognizedType(String),

    #[error("record name must not be empty")]
    EmptyName,

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
