use super::{CacheDocument, CacheSnapshot, HolidayStore, PersistenceResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Fixed namespace key the cache document is stored under.
const CACHE_KEY: &str = "holiday_countdown.holiday_data";

/// Stores the cache document as JSON in a single-row sqlite table.
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS holiday_cache (
                key TEXT PRIMARY KEY,
                document_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl HolidayStore for SqliteStore {
    fn save(&self, snapshot: &CacheSnapshot) -> PersistenceResult<()> {
        let document = CacheDocument::from_snapshot(snapshot)?;
        let json = serde_json::to_string(&document)?;
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "INSERT OR REPLACE INTO holiday_cache (key, document_json) VALUES (?1, ?2)",
            params![CACHE_KEY, json],
        )?;
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<CacheSnapshot>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT document_json FROM holiday_cache WHERE key = ?1")?;
        let json_opt: Option<String> = stmt
            .query_row(params![CACHE_KEY], |row| row.get(0))
            .optional()?;

        let Some(json) = json_opt else {
            return Ok(None);
        };
        let document: CacheDocument = serde_json::from_str(&json)?;
        Ok(Some(document.into_snapshot()))
    }
}
