use super::*;
use serial_test::serial;
use tempfile::tempdir;

fn temp_store() -> (HistoryStore, tempfile::TempDir) {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("history.log");
    let store = HistoryStore::with_path(path);
    (store, dir)
}

#[test]
fn search_event_new_sets_fields() {
    let before = Utc::now();
    let ev = SearchEvent::new("tag:work".to_string(), 3, 12);
    let after = Utc::now();

    assert_eq!(ev.version, HISTORY_VERSION);
    assert_eq!(ev.raw_query, "tag:work");
    assert_eq!(ev.hits, 3);
    assert_eq!(ev.duration_ms, 12);
    assert!(ev.timestamp >= before && ev.timestamp <= after);
}

#[test]
fn search_and_lifecycle_events_round_trip_in_order() {
    let (store, _dir) = temp_store();

    store.log_search(SearchEvent::new("type:pdf".into(), 1, 2));
    store.log_lifecycle(LifecycleAction::Archived, "Report.pdf");
    store.log_lifecycle(LifecycleAction::Deleted, "Notes.txt");

    let events: Vec<HistoryEvent> = store.iter_events().collect();
    assert_eq!(events.len(), 3);

    match &events[0] {
        HistoryEvent::Search(q) => {
            assert_eq!(q.raw_query, "type:pdf");
            assert_eq!(q.hits, 1);
        }
        other => panic!("expected search event, got {:?}", other),
    }
    match &events[2] {
        HistoryEvent::Lifecycle(l) => {
            assert_eq!(l.action, LifecycleAction::Deleted);
            assert_eq!(l.name, "Notes.txt");
        }
        other => panic!("expected lifecycle event, got {:?}", other),
    }
}

#[test]
fn recent_returns_newest_first_and_truncates() {
    let (store, _dir) = temp_store();

    for i in 0..5 {
        store.log_search(SearchEvent::new(format!("q{i}"), i, 1));
    }

    let recent = store.recent(2);
    assert_eq!(recent.len(), 2);
    assert!(recent[0].describe().contains("\"q4\""), "{}", recent[0].describe());
    assert!(recent[1].describe().contains("\"q3\""), "{}", recent[1].describe());
    assert_eq!(store.count(), 5);
}

#[test]
fn describe_lifecycle_event() {
    let ev = HistoryEvent::Lifecycle(LifecycleEvent::new(LifecycleAction::Imported, "/tmp/a.txt"));
    assert_eq!(ev.describe(), "imported /tmp/a.txt");
}

#[test]
fn iter_events_empty_when_file_missing() {
    let (store, _dir) = temp_store();
    assert_eq!(store.count(), 0);
    assert!(store.recent(10).is_empty());
}

#[test]
fn clear_removes_file_and_is_idempotent() {
    let (store, _dir) = temp_store();
    let path = store.path().to_path_buf();

    store.log_lifecycle(LifecycleAction::Archived, "Image.jpg");
    assert!(path.exists());

    store.clear().expect("clear should succeed");
    assert!(!path.exists());

    store.clear().expect("clear should be idempotent");
    assert!(!path.exists());
}

#[test]
fn malformed_lines_are_skipped() {
    let (store, _dir) = temp_store();
    let path = store.path().to_path_buf();

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "this is not json\n").unwrap();

    store.log_lifecycle(LifecycleAction::Archived, "ok.pdf");

    let events: Vec<HistoryEvent> = store.iter_events().collect();
    assert_eq!(events.len(), 1);
    match &events[0] {
        HistoryEvent::Lifecycle(l) => assert_eq!(l.name, "ok.pdf"),
        other => panic!("expected lifecycle event, got {:?}", other),
    }
}

#[test]
#[serial]
fn new_respects_history_disabled_env() {
    let cases: &[(Option<&str>, bool)] = &[
        (None, true),
        (Some("0"), false),
        (Some("false"), false),
        (Some("FALSE"), false),
        (Some("1"), true),
        (Some("TRUE"), true),
    ];

    for (value, enabled) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(HISTORY_DISABLED_ENV, v) },
            None => unsafe { std::env::remove_var(HISTORY_DISABLED_ENV) },
        }
        // Enabled only matters when a state directory can be resolved.
        unsafe { std::env::set_var("XDG_STATE_HOME", "/tmp/filecat-state") };

        assert_eq!(HistoryStore::new().is_some(), *enabled, "env {:?}", value);
    }

    unsafe { std::env::remove_var(HISTORY_DISABLED_ENV) };
    unsafe { std::env::remove_var("XDG_STATE_HOME") };
}
