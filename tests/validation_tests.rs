mod common;
use common::{date, timmy};
use worklog::config::Config;
use worklog::errors::AppError;
use worklog::models::Entry;
use worklog::utils::formatting::{mins2readable, render_entry, rule_for};
use worklog::utils::{parse_date, parse_duration};

#[test]
fn test_parse_date_accepts_mm_dd_yyyy() {
    assert_eq!(parse_date("06/04/2020").unwrap(), date(6, 4, 2020));
    assert_eq!(parse_date("  12/31/1999 \n").unwrap(), date(12, 31, 1999));
}

#[test]
fn test_parse_date_rejects_bad_input() {
    for bad in ["13/40/2020", "2020-06-04", "06-04-2020", "", "02/30/2021", "tomorrow"] {
        assert!(
            matches!(parse_date(bad), Err(AppError::InvalidDate(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_duration() {
    assert_eq!(parse_duration("30").unwrap(), 30);
    assert_eq!(parse_duration(" 0 ").unwrap(), 0);
    assert!(matches!(parse_duration("abc"), Err(AppError::InvalidDuration(_))));
    assert!(matches!(parse_duration("1.5"), Err(AppError::InvalidDuration(_))));
    assert!(matches!(parse_duration("-5"), Err(AppError::InvalidDuration(_))));
}

#[test]
fn test_config_yaml_fills_defaults() {
    let cfg = Config::from_yaml("database: /tmp/custom.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert!(cfg.clear_screen);
    assert_eq!(cfg.separator_char, "=");

    let cfg = Config::from_yaml("clear_screen: false\nseparator_char: '-'\n").unwrap();
    assert!(!cfg.clear_screen);
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.database, Config::default().database);

    assert!(matches!(
        Config::from_yaml("clear_screen: [1, 2"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_render_entry_shows_position_and_fields() {
    let e = timmy();
    let entry = Entry {
        id: 1,
        employee_name: e.employee_name,
        task_name: e.task_name,
        task_time: e.task_time,
        task_date: e.task_date,
        notes: e.notes,
        created_at: "2020-06-04T10:00:00+00:00".into(),
    };

    let out = render_entry(&entry, 2, 5, "=");
    assert!(out.contains("June 04, 2020"));
    assert!(out.contains("Result 2 of 5"));
    assert!(out.contains("Employee: Timmy"));
    assert!(out.contains("Task: test task"));
    assert!(out.contains("Task Time (Minutes): 30 (00h 30m)"));
    assert!(out.contains("Date: 06/04/2020"));
    assert!(out.contains("Notes: Allow me to test your patience.."));
}

#[test]
fn test_rule_matches_title_width() {
    assert_eq!(rule_for("June 04, 2020", "="), "=".repeat(13));
    assert_eq!(rule_for("abc", "-~"), "-~-");
    // double-width separators fill the same number of cells
    assert_eq!(rule_for("June 04, 2020", "＝"), "＝".repeat(6));
    assert_eq!(rule_for("abcd", "＝"), "＝＝");
    assert_eq!(rule_for("abc", ""), "===");
    assert_eq!(mins2readable(125, false), "02h 05m");
    assert_eq!(mins2readable(125, true), "02:05");
}
