use chrono::NaiveDate;
use rworklog::core::report::{RenderMode, render};
use rworklog::db::store::Store;
use rworklog::models::entry::NewEntry;
use rworklog::models::unit::{GENERAL_UNIT, NO_TICKET};
use std::env;
use std::fs;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn temp_store(name: &str) -> (Store, String) {
    let dir = env::temp_dir().join(format!("{}_rworklog_dir", name));
    fs::remove_dir_all(&dir).ok();
    // nested directory: the store creates it
    let path = dir.join("data").join("reports.db");
    let path = path.to_string_lossy().to_string();
    (Store::open(&path).expect("open store"), path)
}

#[test]
fn round_trip_internal_render() {
    let (store, _) = temp_store("round_trip");
    let id = store
        .insert(&NewEntry::new(day("2024-06-01"), "FVM", "Fix printer").with_ticket("T1"))
        .unwrap();

    let text = render(
        &store.query_by_date(day("2024-06-01")).unwrap(),
        RenderMode::Internal,
    );
    assert_eq!(text, format!("FVM:\n- [{}] Ticket [T1]: Fix printer\n\n", id));
}

#[test]
fn inserts_are_visible_and_ids_increase() {
    let (store, _) = temp_store("ids_increase");
    let d = day("2024-06-01");
    let mut last = 0;

    for task in ["one", "two", "three"] {
        let id = store.insert(&NewEntry::new(d, "ODL", task)).unwrap();
        assert!(id > last);
        last = id;

        let entries = store.query_by_date(d).unwrap();
        assert!(entries.iter().any(|e| e.id == id && e.task == task));
    }
}

#[test]
fn group_order_ignores_insertion_order() {
    let (store, _) = temp_store("group_order");
    let d = day("2024-06-01");
    for unit in ["ODL", GENERAL_UNIT, "FVM"] {
        store.insert(&NewEntry::new(d, unit, "x")).unwrap();
    }

    let text = render(&store.query_by_date(d).unwrap(), RenderMode::Export);
    let headers: Vec<&str> = text.lines().filter(|l| l.ends_with(':')).collect();
    assert_eq!(headers, vec!["Allgemein:", "FVM:", "ODL:"]);
}

#[test]
fn empty_ticket_renders_sentinel() {
    let (store, _) = temp_store("ticket_sentinel");
    let d = day("2024-06-01");
    store
        .insert(&NewEntry::new(d, "GRG", "Beamer").with_ticket(""))
        .unwrap();

    let text = render(&store.query_by_date(d).unwrap(), RenderMode::Internal);
    assert!(text.contains(&format!("Ticket [{}]", NO_TICKET)));
}

#[test]
fn empty_day_renders_empty_string() {
    let (store, _) = temp_store("empty_day");
    let entries = store.query_by_date(day("2024-01-01")).unwrap();
    assert!(entries.is_empty());
    assert_eq!(render(&entries, RenderMode::Internal), "");
}

#[test]
fn data_survives_reopen() {
    let (store, path) = temp_store("reopen");
    let id = store
        .insert(&NewEntry::new(day("2024-06-01"), "", "Mails"))
        .unwrap();
    drop(store);

    let store = Store::open(&path).unwrap();
    let e = store.find_by_id(id).unwrap().unwrap();
    assert_eq!(e.unit, GENERAL_UNIT);
    assert_eq!(e.ticket, NO_TICKET);
    assert_eq!(store.query_distinct_dates().unwrap().len(), 1);
}

#[test]
fn opens_database_written_by_desktop_tool() {
    let dir = env::temp_dir().join("legacy_rworklog_dir");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("taetigkeitsbericht.db");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                ticket TEXT,
                school TEXT NOT NULL,
                task TEXT NOT NULL
            );
            INSERT INTO reports (date, ticket, school, task) VALUES ('2024-05-02', NULL, 'VIS', 'Switch');",
        )
        .unwrap();
    }

    let store = Store::open(&path.to_string_lossy()).unwrap();
    let entries = store.query_by_date(day("2024-05-02")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ticket, NO_TICKET);
    assert_eq!(
        render(&entries, RenderMode::Export),
        "VIS:\n- Ticket [Keine]: Switch\n\n"
    );
}
