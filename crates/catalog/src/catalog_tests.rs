use super::*;
use crate::record::FileKind;

fn record(name: &str, size_kb: u64) -> FileRecord {
    let kind = crate::record::classify(name).unwrap_or(FileKind::TextDocument);
    FileRecord::new(kind, name, "C:/Documents", "10.05.2023", size_kb, vec!["work".into()])
        .unwrap()
}

fn catalog(names: &[&str]) -> Catalog {
    let mut c = Catalog::new();
    for (i, name) in names.iter().enumerate() {
        c.add(record(name, i as u64 * 10));
    }
    c
}

fn live_names(c: &Catalog) -> Vec<&str> {
    c.all_live().iter().map(|r| r.name()).collect()
}

fn archived_names(c: &Catalog) -> Vec<&str> {
    c.all_archived().iter().map(|r| r.name()).collect()
}

#[test]
fn added_records_are_found_by_name() {
    let c = catalog(&["Report.pdf", "Image.jpg", "Notes.txt"]);

    for name in ["Report.pdf", "Image.jpg", "Notes.txt"] {
        let rec = c.find_by_name(name).expect("record should be found");
        assert_eq!(rec.name(), name);
    }
    assert!(c.find_by_name("Missing.pdf").is_none());
    assert_eq!(c.len(), 3);
}

#[test]
fn find_by_name_returns_first_of_duplicates() {
    let mut c = Catalog::new();
    c.add(record("Dup.pdf", 1));
    c.add(record("Dup.pdf", 2));

    assert_eq!(c.find_by_name("Dup.pdf").unwrap().size_kb(), 1);
}

#[test]
fn archive_moves_record_out_of_live_set() {
    let mut c = catalog(&["Report.pdf", "Image.jpg", "Notes.txt"]);

    c.archive("Image.jpg").expect("archive existing");

    assert_eq!(live_names(&c), ["Report.pdf", "Notes.txt"]);
    assert_eq!(archived_names(&c), ["Image.jpg"]);
    assert!(c.find_by_name("Image.jpg").is_none());
}

#[test]
fn archived_set_keeps_archive_order() {
    let mut c = catalog(&["a.pdf", "b.pdf", "c.pdf"]);

    c.archive("c.pdf").unwrap();
    c.archive("a.pdf").unwrap();

    assert_eq!(archived_names(&c), ["c.pdf", "a.pdf"]);
}

#[test]
fn archive_twice_signals_not_found() {
    let mut c = catalog(&["Report.pdf"]);

    c.archive("Report.pdf").unwrap();
    match c.archive("Report.pdf") {
        Err(CatalogError::NotFound(name)) => assert_eq!(name, "Report.pdf"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(c.archived_len(), 1);
}

#[test]
fn archive_missing_name_mutates_nothing() {
    let mut c = catalog(&["Report.pdf", "Image.jpg"]);

    assert!(matches!(c.archive("nope.pdf"), Err(CatalogError::NotFound(_))));
    assert_eq!(live_names(&c), ["Report.pdf", "Image.jpg"]);
    assert!(c.all_archived().is_empty());
}

#[test]
fn archive_takes_first_duplicate_only() {
    let mut c = Catalog::new();
    c.add(record("Dup.pdf", 1));
    c.add(record("Dup.pdf", 2));

    c.archive("Dup.pdf").unwrap();

    assert_eq!(c.all_archived()[0].size_kb(), 1);
    assert_eq!(c.find_by_name("Dup.pdf").unwrap().size_kb(), 2);
}

#[test]
fn unconfirmed_delete_is_a_no_op() {
    let mut c = catalog(&["Report.pdf", "Image.jpg"]);

    let removed = c.delete("Report.pdf", false).expect("record exists");
    assert!(removed.is_none());
    assert_eq!(live_names(&c), ["Report.pdf", "Image.jpg"]);
    assert!(c.all_archived().is_empty());
}

#[test]
fn confirmed_delete_removes_permanently() {
    let mut c = catalog(&["Report.pdf", "Image.jpg"]);

    let removed = c.delete("Report.pdf", true).unwrap().expect("record removed");
    assert_eq!(removed.name(), "Report.pdf");

    assert_eq!(live_names(&c), ["Image.jpg"]);
    assert!(c.all_archived().is_empty());
    assert!(c.find_by_name("Report.pdf").is_none());
    assert!(matches!(c.delete("Report.pdf", true), Err(CatalogError::NotFound(_))));
}

#[test]
fn delete_cannot_reach_archived_records() {
    let mut c = catalog(&["Report.pdf"]);
    c.archive("Report.pdf").unwrap();

    for confirmed in [false, true] {
        assert!(matches!(
            c.delete("Report.pdf", confirmed),
            Err(CatalogError::NotFound(_))
        ));
    }
    assert_eq!(c.archived_len(), 1);
}

#[test]
fn delete_missing_name_signals_not_found_regardless_of_confirmation() {
    let mut c = catalog(&["Report.pdf"]);

    for confirmed in [false, true] {
        assert!(matches!(c.delete("x.pdf", confirmed), Err(CatalogError::NotFound(_))));
    }
    assert_eq!(c.len(), 1);
}

#[test]
fn set_modification_date_and_add_tag_target_live_records() {
    let mut c = catalog(&["Report.pdf", "Image.jpg"]);

    c.set_modification_date("Image.jpg", "01.03.2024").unwrap();
    c.add_tag("Image.jpg", "family").unwrap();

    let rec = c.find_by_name("Image.jpg").unwrap();
    assert_eq!(rec.modification_date(), "01.03.2024");
    assert_eq!(rec.tags(), ["work", "family"]);

    c.archive("Image.jpg").unwrap();
    assert!(matches!(
        c.set_modification_date("Image.jpg", "02.03.2024"),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(c.add_tag("Image.jpg", "x"), Err(CatalogError::NotFound(_))));
}

#[test]
fn open_describes_live_records_only() {
    let mut c = catalog(&["Report.pdf", "Podcast.mp3"]);

    assert_eq!(c.open("Podcast.mp3").unwrap(), "opened audio file: Podcast.mp3");

    c.archive("Podcast.mp3").unwrap();
    assert!(matches!(c.open("Podcast.mp3"), Err(CatalogError::NotFound(_))));
}

#[test]
fn extend_appends_in_order() {
    let mut c = catalog(&["a.pdf"]);
    c.extend([record("b.txt", 1), record("c.mp3", 2)]);

    assert_eq!(live_names(&c), ["a.pdf", "b.txt", "c.mp3"]);
    assert!(!c.is_empty());
}
