mod common;
use common::{alice, date, memory_store, timmy};
use worklog::core::search::{self, TermTarget};
use worklog::db::Filter;
use worklog::models::NewEntry;

#[test]
fn test_search_by_employee_returns_only_that_employee() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store.create(&alice()).unwrap();
    store
        .create(&NewEntry::new("Timmy", "second task", 15, date(6, 5, 2020), ""))
        .unwrap();

    let results = search::run(&store, &search::by_employee("Timmy")).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|e| e.employee_name == "Timmy"));
}

#[test]
fn test_employee_match_is_exact() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store
        .create(&NewEntry::new("Tim", "other", 5, date(6, 5, 2020), ""))
        .unwrap();

    let results = search::run(&store, &search::by_employee("Tim")).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].employee_name, "Tim");
}

#[test]
fn test_employee_choices_keep_duplicates_newest_first() {
    let store = memory_store();
    store.create(&timmy()).unwrap(); // 06/04/2020
    store.create(&alice()).unwrap(); // 06/10/2020
    store
        .create(&NewEntry::new("Timmy", "late", 5, date(7, 1, 2020), ""))
        .unwrap();

    let names = search::employee_choices(&store).unwrap();
    assert_eq!(names, vec!["Timmy", "Alice", "Timmy"]);
}

#[test]
fn test_search_by_term_in_notes() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store.create(&alice()).unwrap();

    let found = search::run(&store, &search::by_term(TermTarget::Notes, "patience")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].notes, "Allow me to test your patience..");

    let none = search::run(&store, &search::by_term(TermTarget::Notes, "zzz")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_search_by_term_in_task_name_ignores_notes() {
    let store = memory_store();
    store.create(&timmy()).unwrap();

    let in_task = search::run(&store, &search::by_term(TermTarget::TaskName, "test")).unwrap();
    assert_eq!(in_task.len(), 1);

    // "patience" only appears in the notes
    let only_notes =
        search::run(&store, &search::by_term(TermTarget::TaskName, "patience")).unwrap();
    assert!(only_notes.is_empty());
}

#[test]
fn test_search_by_single_date() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store.create(&alice()).unwrap();

    let results = search::run(&store, &search::by_date(date(6, 10, 2020))).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].employee_name, "Alice");
}

#[test]
fn test_date_choices_are_distinct_newest_first() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store.create(&timmy()).unwrap();
    store.create(&alice()).unwrap();

    let dates = search::date_choices(&store).unwrap();
    assert_eq!(dates, vec![date(6, 10, 2020), date(6, 4, 2020)]);
}

#[test]
fn test_date_range_is_inclusive() {
    let store = memory_store();
    store.create(&timmy()).unwrap(); // 06/04/2020
    store.create(&alice()).unwrap(); // 06/10/2020
    store
        .create(&NewEntry::new("Bob", "outside", 5, date(6, 11, 2020), ""))
        .unwrap();

    let results =
        search::run(&store, &search::by_date_range(date(6, 4, 2020), date(6, 10, 2020))).unwrap();
    let names: Vec<&str> = results.iter().map(|e| e.employee_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Timmy"]);
}

#[test]
fn test_reversed_date_range_is_swapped() {
    let filter = search::by_date_range(date(12, 31, 2020), date(1, 1, 2020));
    assert_eq!(
        filter,
        Filter::DateRange {
            start: date(1, 1, 2020),
            end: date(12, 31, 2020),
        }
    );
}

#[test]
fn test_search_by_duration_only_for_known_durations() {
    let store = memory_store();
    store.create(&timmy()).unwrap();
    store.create(&alice()).unwrap();

    let filter = search::by_duration(&store, 30).unwrap().expect("30 is on record");
    let results = search::run(&store, &filter).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].task_time, 30);

    assert!(search::by_duration(&store, 31).unwrap().is_none());
    assert_eq!(search::duration_choices(&store).unwrap(), vec![30, 45]);
}
