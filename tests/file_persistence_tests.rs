use chrono::{Local, NaiveDate, TimeZone};
use holiday_countdown::HolidayPeriod;
use holiday_countdown::persistence::{CacheSnapshot, HolidayStore, JsonFileStore};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_snapshot() -> CacheSnapshot {
    CacheSnapshot {
        holidays: vec![
            HolidayPeriod::from_start("元旦", day(2025, 1, 1), 1),
            HolidayPeriod::from_start("春节", day(2025, 1, 28), 8),
            HolidayPeriod::from_start("国庆节", day(2025, 10, 1), 7),
        ],
        last_refreshed: Some(Local.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap()),
    }
}

#[test]
fn round_trips_a_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("cache.json"));
    let snapshot = sample_snapshot();

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded.holidays, snapshot.holidays);
    assert_eq!(loaded.last_refreshed, snapshot.last_refreshed);
}

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("does_not_exist.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_replaces_the_whole_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("cache.json"));

    store.save(&sample_snapshot()).unwrap();
    let replacement = CacheSnapshot {
        holidays: vec![HolidayPeriod::from_start("端午节", day(2025, 5, 31), 3)],
        last_refreshed: Some(Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()),
    };
    store.save(&replacement).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.holidays.len(), 1);
    assert_eq!(loaded.holidays[0].name, "端午节");
}

#[test]
fn malformed_entries_skipped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(
        &path,
        r#"{
            "holidays": [
                {"date": "2025-10-01", "name": "国庆节", "duration": 7},
                {"date": "not-a-date", "name": "坏数据", "duration": 1},
                {"date": "2025-01-01", "name": "元旦", "duration": 0}
            ],
            "last_updated": null
        }"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.holidays.len(), 1);
    assert_eq!(loaded.holidays[0].name, "国庆节");
    assert_eq!(loaded.holidays[0].duration_days, 7);
    assert!(loaded.last_refreshed.is_none());
}

#[test]
fn loaded_list_is_sorted_by_start_date() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(
        &path,
        r#"{
            "holidays": [
                {"date": "2025-10-01", "name": "国庆节", "duration": 7},
                {"date": "2025-01-01", "name": "元旦", "duration": 1}
            ],
            "last_updated": "2025-06-01T08:30:00+08:00"
        }"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.holidays[0].name, "元旦");
    assert_eq!(loaded.holidays[1].name, "国庆节");
    assert!(loaded.last_refreshed.is_some());
}
