use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::CatalogError;

/// Closed set of record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileKind {
    TextDocument,
    #[serde(rename = "PDFDocument")]
    PdfDocument,
    ImageFile,
    VideoFile,
    AudioFile,
}

/// Extension markers in classification priority order.
///
/// Matching is by substring, not suffix: `report.txtfinal` is a text document
/// and `a.mp3.pdf` is a PDF because `.pdf` is checked first.
const EXTENSION_MARKERS: [(&str, FileKind); 5] = [
    (".pdf", FileKind::PdfDocument),
    (".jpg", FileKind::ImageFile),
    (".txt", FileKind::TextDocument),
    (".mp4", FileKind::VideoFile),
    (".mp3", FileKind::AudioFile),
];

/// Classify a file name by the first extension marker it contains.
pub fn classify(name: &str) -> Option<FileKind> {
    EXTENSION_MARKERS
        .iter()
        .find(|(marker, _)| name.contains(marker))
        .map(|&(_, kind)| kind)
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::TextDocument,
        FileKind::PdfDocument,
        FileKind::ImageFile,
        FileKind::VideoFile,
        FileKind::AudioFile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::TextDocument => "TextDocument",
            FileKind::PdfDocument => "PDFDocument",
            FileKind::ImageFile => "ImageFile",
            FileKind::VideoFile => "VideoFile",
            FileKind::AudioFile => "AudioFile",
        }
    }

    /// Short type code used when adding a record by hand.
    pub fn code(self) -> &'static str {
        match self {
            FileKind::TextDocument => "txt",
            FileKind::PdfDocument => "pdf",
            FileKind::ImageFile => "jpg",
            FileKind::VideoFile => "mp4",
            FileKind::AudioFile => "mp3",
        }
    }

    /// Resolve a type code (`txt`, `pdf`, `jpg`, `mp4`, `mp3`).
    ///
    /// Unlike import, where an unknown type only skips the line, an unknown
    /// code here is a hard error.
    pub fn from_code(code: &str) -> Result<FileKind, CatalogError> {
        FileKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| CatalogError::UnrecognizedType(code.to_owned()))
    }

    fn open_label(self) -> &'static str {
        match self {
            FileKind::TextDocument => "text document",
            FileKind::PdfDocument => "PDF document",
            FileKind::ImageFile => "image",
            FileKind::VideoFile => "video file",
            FileKind::AudioFile => "audio file",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts variant names case-insensitively (`ImageFile`, `pdfdocument`).
impl FromStr for FileKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnrecognizedType(s.to_owned()))
    }
}

/// Metadata describing one file. The file itself is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    name: String,
    path: String,
    /// `DD.MM.YYYY`, compared as a plain string
    creation_date: String,
    /// Same format as `creation_date`; empty until first set
    modification_date: String,
    size_kb: u64,
    /// Insertion ordered, duplicates allowed
    tags: Vec<String>,
    #[serde(rename = "type")]
    kind: FileKind,
}

impl FileRecord {
    pub fn new(
        kind: FileKind,
        name: impl Into<String>,
        path: impl Into<String>,
        creation_date: impl Into<String>,
        size_kb: u64,
        tags: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        Ok(Self {
            name,
            path: path.into(),
            creation_date: creation_date.into(),
            modification_date: String::new(),
            size_kb,
            tags,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn creation_date(&self) -> &str {
        &self.creation_date
    }

    pub fn modification_date(&self) -> &str {
        &self.modification_date
    }

    pub fn size_kb(&self) -> u64 {
        self.size_kb
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn set_modification_date(&mut self, date: impl Into<String>) {
        self.modification_date = date.into();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Describe opening this record. No file is accessed.
    pub fn open_description(&self) -> String {
        format!("opened {}: {}", self.kind.open_label(), self.name)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
