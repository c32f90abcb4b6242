// tests/snapshot_store.rs
//
// progress.json load/save behavior.
//
use std::fs;

use academy_tracker::data::{LevelProgress, ProgressSnapshot, Tier, TopicRecord};
use academy_tracker::store;
use chrono::NaiveDate;

fn stamp(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn sample() -> ProgressSnapshot {
    let mut s = ProgressSnapshot::default();
    s.topics.insert(
        "SQL injection".into(),
        TopicRecord {
            total_labs: 18,
            completed: 2,
            last_updated: stamp(19).and_hms_micro_opt(9, 0, 1, 123_456).unwrap(),
        },
    );
    s.level_progress.insert(Tier::Apprentice, LevelProgress { completed: 5, total: 52 });
    s
}

#[test]
fn missing_file_loads_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let s = store::load(&dir.path().join("progress.json")).unwrap();
    assert_eq!(s, ProgressSnapshot::default());
}

#[test]
fn save_stamps_date_and_pretty_prints() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/progress.json");
    let mut s = sample();
    store::save_dated(&mut s, &path, stamp(19)).unwrap();

    assert_eq!(s.last_updated.as_deref(), Some("10/19/26"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"topics\": {"), "{text}");
    assert!(text.contains("\"last_updated\": \"2026-10-19T09:00:01.123456\""));
    assert!(text.contains("\"last_updated\": \"10/19/26\""));
}

#[test]
fn save_of_load_is_stable_apart_from_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    let mut s = sample();
    store::save_dated(&mut s, &path, stamp(19)).unwrap();

    let mut first = store::load(&path).unwrap();
    store::save_dated(&mut first, &path, stamp(19)).unwrap();
    let bytes_1 = fs::read(&path).unwrap();

    let mut second = store::load(&path).unwrap();
    store::save_dated(&mut second, &path, stamp(19)).unwrap();
    let bytes_2 = fs::read(&path).unwrap();
    assert_eq!(bytes_1, bytes_2);

    // A later day only moves the stamp.
    let mut third = store::load(&path).unwrap();
    store::save(&mut third, &path).unwrap();
    let mut reloaded = store::load(&path).unwrap();
    reloaded.last_updated = second.last_updated.clone();
    assert_eq!(reloaded, second);
}

#[test]
fn loads_snapshot_written_by_older_tool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    fs::write(
        &path,
        r#"{
  "topics": {
    "Clickjacking": {
      "total_labs": 5,
      "completed": 5,
      "last_updated": "2024-11-04T09:00:12.345678"
    }
  },
  "level_progress": {
    "apprentice": {"completed": 10, "total": 52},
    "practitioner": {"completed": 0, "total": 185},
    "expert": {"completed": 0, "total": 33}
  },
  "last_updated": null
}"#,
    )
    .unwrap();

    let s = store::load(&path).unwrap();
    assert_eq!(s.topics["Clickjacking"].completed, 5);
    assert_eq!(s.level_progress[&Tier::Practitioner].total, 185);
    assert_eq!(s.last_updated, None);
}

#[test]
fn corrupt_file_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(store::load(&path).is_err());
}
