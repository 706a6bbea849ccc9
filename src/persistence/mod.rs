use crate::holiday::HolidayPeriod;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// What a store saves and restores: the grouped holiday list plus the
/// timestamp of the refresh that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    pub holidays: Vec<HolidayPeriod>,
    pub last_refreshed: Option<DateTime<Local>>,
}

pub trait HolidayStore {
    /// Replace the stored document wholesale.
    fn save(&self, snapshot: &CacheSnapshot) -> PersistenceResult<()>;
    /// Load the stored document, or `None` when nothing has been saved yet.
    fn load(&self) -> PersistenceResult<Option<CacheSnapshot>>;
}

#[derive(Serialize, Deserialize)]
struct CachedHoliday {
    date: NaiveDate,
    name: String,
    duration: i64,
}

/// The persisted document form. Holiday entries are kept as raw JSON values
/// on the way in so one malformed entry is skipped without discarding the
/// rest of the cache.
#[derive(Serialize, Deserialize)]
pub(crate) struct CacheDocument {
    holidays: Vec<serde_json::Value>,
    last_updated: Option<String>,
}

impl CacheDocument {
    pub(crate) fn from_snapshot(snapshot: &CacheSnapshot) -> PersistenceResult<Self> {
        let mut holidays = Vec::with_capacity(snapshot.holidays.len());
        for period in &snapshot.holidays {
            let record = CachedHoliday {
                date: period.start_date,
                name: period.name.clone(),
                duration: period.duration_days,
            };
            holidays.push(serde_json::to_value(record)?);
        }
        Ok(Self {
            holidays,
            last_updated: snapshot.last_refreshed.map(|ts| ts.to_rfc3339()),
        })
    }

    pub(crate) fn into_snapshot(self) -> CacheSnapshot {
        let mut holidays = Vec::with_capacity(self.holidays.len());
        for entry in self.holidays {
            match serde_json::from_value::<CachedHoliday>(entry) {
                Ok(record) if record.duration >= 1 => {
                    holidays.push(HolidayPeriod::from_start(
                        record.name,
                        record.date,
                        record.duration,
                    ));
                }
                Ok(record) => {
                    log::warn!(
                        "skipping cached holiday '{}': invalid duration {}",
                        record.name,
                        record.duration
                    );
                }
                Err(err) => {
                    log::warn!("skipping malformed cached holiday entry: {err}");
                }
            }
        }
        holidays.sort_by_key(|period| period.start_date);

        let last_refreshed = self.last_updated.as_deref().and_then(|raw| {
            match DateTime::parse_from_rfc3339(raw) {
                Ok(ts) => Some(ts.with_timezone(&Local)),
                Err(err) => {
                    log::warn!("ignoring cached last_updated '{raw}': {err}");
                    None
                }
            }
        });

        CacheSnapshot {
            holidays,
            last_refreshed,
        }
    }
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::JsonFileStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
