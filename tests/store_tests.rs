use rpomodoro::errors::AppError;
use rpomodoro::models::DailySettings;
use rpomodoro::utils::date::parse_reset_timestamp;
use std::fs;

mod common;
use common::{at, settings, store_with, temp_store, write_raw};

#[test]
fn test_write_then_read_round_trips() {
    let original = settings(50, 10, 240, 75, Some(at(2026, 3, 14, 9, 26, 53)));
    let (_dir, store) = store_with(&original);

    assert_eq!(store.read().unwrap(), original);
}

#[test]
fn test_round_trip_without_last_reset() {
    let original = settings(25, 5, 360, 0, None);
    let (_dir, store) = store_with(&original);

    assert_eq!(store.read().unwrap(), original);
    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.trim_end(), "25,5,360,0,");
}

#[test]
fn test_row_layout_on_disk() {
    let (_dir, store) = store_with(&settings(30, 7, 400, 12, Some(at(2026, 10, 19, 8, 0, 5))));

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.trim_end(), "30,7,400,12,2026-10-19T08:00:05");
}

#[test]
fn test_reads_row_with_crlf_and_missing_fifth_field() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,5,360,42\r\n");

    let s = store.read().unwrap();
    assert_eq!(s, settings(25, 5, 360, 42, None));
}

#[test]
fn test_only_first_row_is_meaningful() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,5,360,42,2026-10-19T07:00:00\n1,2,3,4,\n");

    let s = store.read().unwrap();
    assert_eq!(s.daily_completed_minutes, 42);
    assert_eq!(s.last_reset, Some(at(2026, 10, 19, 7, 0, 0)));
}

#[test]
fn test_unparseable_timestamp_reads_as_never_reset() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,5,360,42,yesterday-ish\n");

    assert_eq!(store.read().unwrap().last_reset, None);
}

#[test]
fn test_too_few_fields_is_malformed() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,5,360\n");

    match store.read() {
        Err(AppError::MalformedRecord(msg)) => assert!(msg.contains("found 3")),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_non_integer_field_is_malformed() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,five,360,0,\n");

    match store.read() {
        Err(AppError::MalformedRecord(msg)) => assert!(msg.contains("break_minutes")),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_negative_completed_minutes_is_malformed() {
    let (_dir, store) = temp_store();
    write_raw(&store, "25,5,360,-3,\n");

    assert!(matches!(store.read(), Err(AppError::MalformedRecord(_))));
}

#[test]
fn test_empty_file_is_malformed() {
    let (_dir, store) = temp_store();
    write_raw(&store, "");

    assert!(matches!(store.read(), Err(AppError::MalformedRecord(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let (_dir, store) = temp_store();

    assert!(matches!(store.read(), Err(AppError::Io(_))));
}

#[test]
fn test_init_if_missing_writes_defaults_once() {
    let (dir, _) = temp_store();
    let store = rpomodoro::store::SettingsStore::new(dir.path().join("nested/data.csv"));

    assert!(store.init_if_missing().unwrap());
    assert_eq!(store.read().unwrap(), DailySettings::default());

    write_raw(&store, "1,2,3,4,\n");
    assert!(!store.init_if_missing().unwrap());
    assert_eq!(store.read().unwrap(), settings(1, 2, 3, 4, None));
}

#[test]
fn test_write_leaves_no_temp_file_behind() {
    let (dir, store) = store_with(&DailySettings::default());
    store.write(&settings(1, 1, 1, 1, None)).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["data.csv".to_string()]);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let (dir, _) = temp_store();
    let store = rpomodoro::store::SettingsStore::new(dir.path().join("nope/data.csv"));

    assert!(store.write(&DailySettings::default()).is_err());
}

#[test]
fn test_parse_reset_timestamp_variants() {
    let expected = at(2026, 10, 19, 8, 30, 0);

    assert_eq!(parse_reset_timestamp("2026-10-19T08:30:00"), Some(expected));
    assert_eq!(parse_reset_timestamp(" 2026-10-19T08:30:00 "), Some(expected));
    assert_eq!(parse_reset_timestamp("2026-10-19 08:30:00"), Some(expected));
    assert_eq!(parse_reset_timestamp("2026-10-19T08:30:00.250"), Some(expected + chrono::TimeDelta::milliseconds(250)));
    assert_eq!(parse_reset_timestamp("2026-10-19"), Some(at(2026, 10, 19, 0, 0, 0)));
    assert_eq!(parse_reset_timestamp(""), None);
    assert_eq!(parse_reset_timestamp("not a date"), None);
}

#[test]
fn test_failed_write_removes_temp_file() {
    let (dir, _) = temp_store();
    // a non-empty directory where the data file should be: rename fails
    let target = dir.path().join("data.csv");
    fs::create_dir_all(target.join("occupied")).unwrap();
    let store = rpomodoro::store::SettingsStore::new(&target);

    assert!(store.write(&DailySettings::default()).is_err());
    assert!(!dir.path().join("data.csv.tmp").exists());
}
