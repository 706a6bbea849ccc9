#![cfg(feature = "sqlite")]

use chrono::{Local, NaiveDate, TimeZone};
use holiday_countdown::HolidayPeriod;
use holiday_countdown::persistence::{CacheSnapshot, HolidayStore, SqliteStore};
use tempfile::NamedTempFile;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_snapshot() -> CacheSnapshot {
    CacheSnapshot {
        holidays: vec![
            HolidayPeriod::from_start("劳动节", day(2025, 5, 1), 5),
            HolidayPeriod::from_start("国庆节", day(2025, 10, 1), 7),
        ],
        last_refreshed: Some(Local.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap()),
    }
}

#[test]
fn empty_database_loads_as_none() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn round_trips_a_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();
    let snapshot = sample_snapshot();

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded.holidays, snapshot.holidays);
    assert_eq!(loaded.last_refreshed, snapshot.last_refreshed);
}

#[test]
fn save_replaces_the_stored_document() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteStore::new(file.path()).unwrap();

    store.save(&sample_snapshot()).unwrap();
    let replacement = CacheSnapshot {
        holidays: vec![HolidayPeriod::from_start("中秋节", day(2025, 10, 6), 1)],
        last_refreshed: Some(Local.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap()),
    };
    store.save(&replacement).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.holidays.len(), 1);
    assert_eq!(loaded.holidays[0].name, "中秋节");
}

#[test]
fn survives_reopening_the_database() {
    let file = NamedTempFile::new().unwrap();
    let snapshot = sample_snapshot();

    {
        let store = SqliteStore::new(file.path()).unwrap();
        store.save(&snapshot).unwrap();
    }

    let store = SqliteStore::new(file.path()).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.holidays, snapshot.holidays);
}
