use super::*;

fn record(kind: FileKind, name: &str) -> FileRecord {
    FileRecord::new(kind, name, "C:/Documents", "10.05.2023", 200, vec![]).unwrap()
}

#[test]
fn classify_uses_substring_and_priority_order() {
    let cases: &[(&str, Option<FileKind>)] = &[
        ("Report.pdf", Some(FileKind::PdfDocument)),
        ("Image.jpg", Some(FileKind::ImageFile)),
        ("Notes.txt", Some(FileKind::TextDocument)),
        ("Video.mp4", Some(FileKind::VideoFile)),
        ("Podcast.mp3", Some(FileKind::AudioFile)),
        // substring, not suffix
        ("report.txtfinal", Some(FileKind::TextDocument)),
        // .pdf wins over everything that comes later in the order
        ("song.mp3.pdf", Some(FileKind::PdfDocument)),
        ("clip.mp4.jpg", Some(FileKind::ImageFile)),
        ("notes.txt.mp3", Some(FileKind::TextDocument)),
        // case sensitive, like the markers themselves
        ("Report.PDF", None),
        ("archive.zip", None),
        ("pdf", None),
        ("", None),
    ];

    for (name, expected) in cases {
        assert_eq!(classify(name), *expected, "name: {:?}", name);
    }
}

#[test]
fn from_code_accepts_known_codes_only() {
    for kind in FileKind::ALL {
        assert_eq!(FileKind::from_code(kind.code()).unwrap(), kind);
    }

    match FileKind::from_code("docx") {
        Err(CatalogError::UnrecognizedType(code)) => assert_eq!(code, "docx"),
        other => panic!("expected UnrecognizedType, got {:?}", other),
    }
    assert!(FileKind::from_code("PDF").is_err());
}

#[test]
fn from_str_matches_variant_names_case_insensitively() {
    let cases: &[(&str, Option<FileKind>)] = &[
        ("ImageFile", Some(FileKind::ImageFile)),
        ("imagefile", Some(FileKind::ImageFile)),
        ("PDFDocument", Some(FileKind::PdfDocument)),
        ("pdfdocument", Some(FileKind::PdfDocument)),
        ("TextDocument", Some(FileKind::TextDocument)),
        ("VideoFile", Some(FileKind::VideoFile)),
        ("AudioFile", Some(FileKind::AudioFile)),
        ("Spreadsheet", None),
        ("", None),
    ];

    for (input, expected) in cases {
        let got = input.parse::<FileKind>().ok();
        assert_eq!(got, *expected, "input: {:?}", input);
    }
}

#[test]
fn display_uses_variant_name() {
    assert_eq!(FileKind::PdfDocument.to_string(), "PDFDocument");
    assert_eq!(FileKind::AudioFile.to_string(), "AudioFile");
}

#[test]
fn new_rejects_empty_name() {
    let err = FileRecord::new(FileKind::TextDocument, "", "p", "01.01.2021", 1, vec![]);
    assert!(matches!(err, Err(CatalogError::EmptyName)));
}

#[test]
fn new_starts_with_empty_modification_date() {
    let rec = record(FileKind::PdfDocument, "Report.pdf");
    assert_eq!(rec.modification_date(), "");
    assert_eq!(rec.kind(), FileKind::PdfDocument);
    assert_eq!(rec.size_kb(), 200);
}

#[test]
fn modification_date_can_be_updated_repeatedly() {
    let mut rec = record(FileKind::TextDocument, "Notes.txt");
    rec.set_modification_date("01.02.2024");
    rec.set_modification_date("03.02.2024");
    assert_eq!(rec.modification_date(), "03.02.2024");
}

#[test]
fn tags_keep_order_and_duplicates() {
    let mut rec = record(FileKind::ImageFile, "Image.jpg");
    rec.add_tag("family");
    rec.add_tag("vacation");
    rec.add_tag("family");

    assert_eq!(rec.tags(), ["family", "vacation", "family"]);
    assert!(rec.has_tag("vacation"));
    assert!(!rec.has_tag("Vacation"));
}

#[test]
fn open_description_per_kind() {
    let cases: &[(FileKind, &str, &str)] = &[
        (FileKind::TextDocument, "Notes.txt", "opened text document: Notes.txt"),
        (FileKind::PdfDocument, "Report.pdf", "opened PDF document: Report.pdf"),
        (FileKind::ImageFile, "Image.jpg", "opened image: Image.jpg"),
        (FileKind::VideoFile, "Video.mp4", "opened video file: Video.mp4"),
        (FileKind::AudioFile, "Podcast.mp3", "opened audio file: Podcast.mp3"),
    ];

    for (kind, name, expected) in cases {
        assert_eq!(record(*kind, name).open_description(), *expected);
    }
}
