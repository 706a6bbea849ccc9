use super::{CacheDocument, CacheSnapshot, HolidayStore, PersistenceResult};
use std::fs::File;
use std::path::PathBuf;

/// Stores the cache document as a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HolidayStore for JsonFileStore {
    fn save(&self, snapshot: &CacheSnapshot) -> PersistenceResult<()> {
        let document = CacheDocument::from_snapshot(snapshot)?;
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &document)?;
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<CacheSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        let document: CacheDocument = serde_json::from_reader(file)?;
        Ok(Some(document.into_snapshot()))
    }
}
