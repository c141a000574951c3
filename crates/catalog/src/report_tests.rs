use super::*;
use crate::record::FileKind;

fn record(size_kb: u64, modified: &str) -> FileRecord {
    let kind = FileKind::TextDocument;
    let mut r = FileRecord::new(kind, "a.txt", "", "01.01.2021", size_kb, vec![]).unwrap();
    r.set_modification_date(modified);
    r
}

#[test]
fn empty_set_is_all_zero() {
    let report = summarize(std::iter::empty::<&FileRecord>());
    assert_eq!(
        report,
        Report {
            count: 0,
            total_size_kb: 0,
            average_size_kb: 0,
            last_modification_date: String::new(),
        }
    );
}

#[test]
fn totals_and_floor_average() {
    let records = [record(10, ""), record(20, ""), record(25, "")];
    let report = summarize(&records);

    assert_eq!(report.count, 3);
    assert_eq!(report.total_size_kb, 55);
    assert_eq!(report.average_size_kb, 18);
    assert_eq!(report.last_modification_date, "");
}

#[test]
fn last_modification_date_is_string_maximum() {
    let cases: &[(&[&str], &str)] = &[
        (&["", ""], ""),
        (&["", "01.01.2024"], "01.01.2024"),
        (&["05.03.2021", "01.01.2024"], "05.03.2021"),
        (&["31.12.1999", "30.12.2099"], "31.12.1999"),
    ];

    for (dates, expected) in cases {
        let records: Vec<FileRecord> = dates.iter().map(|d| record(1, d)).collect();
        let report = summarize(&records);
        assert_eq!(report.last_modification_date, *expected, "dates: {:?}", dates);
    }
}

#[test]
fn accepts_borrowed_search_results() {
    let records = [record(100, "02.02.2022"), record(300, "")];
    let refs: Vec<&FileRecord> = records.iter().collect();

    let report = summarize(refs.iter().copied());
    assert_eq!(report.count, 2);
    assert_eq!(report.average_size_kb, 200);
}
