//! Persistence for the ordered timer collection.
//!
//! The whole collection lives in one JSON document (`timers.json`) under the
//! data directory, read once at startup and rewritten wholesale on every
//! mutation. Element order is the display order. Reads fail open: a missing
//! or corrupt store yields an empty collection and a warning, never an error
//! surfaced to the user.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::timer::TimerRecord;

/// File name of the timer collection inside the data directory.
pub const STORE_FILE: &str = "timers.json";

/// Environment override for the data directory (used heavily by tests).
pub const DATA_DIR_ENV: &str = "TEALTIMER_DATA_DIR";

/// Errors from store mutations.
///
/// Only writes and lookups can fail; reads degrade to an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write timer store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode timer store: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no timer named \"{0}\"")]
    NotFound(String),
    #[error("a timer with id {0} already exists")]
    DuplicateId(Uuid),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Ordered collection of timer records, synchronously persisted.
#[derive(Debug)]
pub struct TimerStore {
    path: PathBuf,
    timers: Vec<TimerRecord>,
}

impl TimerStore {
    /// Open the store at `path`, loading whatever is readable there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let timers = load_collection(&path);
        Self { path, timers }
    }

    /// Resolve the store path from an optional configured data directory.
    ///
    /// Precedence: explicit config override, then the `TEALTIMER_DATA_DIR`
    /// environment variable, then the platform data directory.
    pub fn resolve_path(configured: Option<&Path>) -> Result<PathBuf, StoreError> {
        if let Some(dir) = configured {
            return Ok(dir.join(STORE_FILE));
        }
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir).join(STORE_FILE));
        }
        dirs::data_dir()
            .map(|d| d.join("tealtimer").join(STORE_FILE))
            .ok_or(StoreError::NoDataDir)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All timers in display order.
    pub fn timers(&self) -> &[TimerRecord] {
        &self.timers
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&TimerRecord> {
        self.timers.iter().find(|t| t.id == id)
    }

    /// Case-insensitive lookup by name (first match in display order).
    pub fn find_by_name(&self, name: &str) -> Option<&TimerRecord> {
        self.timers
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Append a timer and persist.
    pub fn add(&mut self, record: TimerRecord) -> Result<(), StoreError> {
        if self.get(record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.timers.push(record);
        self.save()
    }

    /// Replace the record with the same id and persist.
    pub fn update(&mut self, record: TimerRecord) -> Result<(), StoreError> {
        match self.timers.iter_mut().find(|t| t.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.save()
            }
            None => Err(StoreError::NotFound(record.name)),
        }
    }

    /// Remove a timer by id and persist; returns the removed record.
    pub fn delete(&mut self, id: Uuid) -> Result<TimerRecord, StoreError> {
        match self.timers.iter().position(|t| t.id == id) {
            Some(idx) => {
                let removed = self.timers.remove(idx);
                self.save()?;
                Ok(removed)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Move the timer at `from` to position `to` and persist.
    ///
    /// Indices out of range are clamped; a no-op move skips the write.
    pub fn move_timer(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        if self.timers.is_empty() {
            return Ok(());
        }
        let last = self.timers.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return Ok(());
        }
        let record = self.timers.remove(from);
        self.timers.insert(to, record);
        self.save()
    }

    /// Persist the collection (temp file + rename).
    fn save(&self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(&self.timers)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Load the collection from disk, failing open to empty.
fn load_collection(path: &Path) -> Vec<TimerRecord> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable timer store, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<TimerRecord>>(&content) {
        Ok(mut timers) => {
            for timer in &mut timers {
                timer.normalize();
            }
            timers
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt timer store, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ThemeKind;

    fn store_in(dir: &tempfile::TempDir) -> TimerStore {
        TimerStore::open(dir.path().join(STORE_FILE))
    }

    fn record(name: &str) -> TimerRecord {
        TimerRecord::new(name, "", "2030-01-01T00:00", ThemeKind::Digital)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "{not json").unwrap();
        assert!(store_in(&dir).is_empty());
    }

    #[test]
    fn add_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add(record("Launch")).unwrap();
        store.add(record("Deadline")).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.timers()[0].name, "Launch");
        assert_eq!(reopened.timers()[1].name, "Deadline");
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let r = record("a");
        store.add(r.clone()).unwrap();
        assert!(matches!(store.add(r), Err(StoreError::DuplicateId(_))));
    }

    #[test]
    fn update_replaces_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let mut r = record("Before");
        store.add(r.clone()).unwrap();

        r.name = "After".to_string();
        r.theme = ThemeKind::Calendar;
        store.update(r.clone()).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.timers()[0].name, "After");
        assert_eq!(reopened.timers()[0].theme, ThemeKind::Calendar);
    }

    #[test]
    fn update_unknown_id_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(matches!(
            store.update(record("ghost")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let r = record("gone");
        store.add(r.clone()).unwrap();
        let removed = store.delete(r.id).unwrap();
        assert_eq!(removed.name, "gone");
        assert!(store_in(&dir).is_empty());
    }

    #[test]
    fn move_timer_reorders_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for name in ["a", "b", "c"] {
            store.add(record(name)).unwrap();
        }

        store.move_timer(2, 0).unwrap();
        let names: Vec<_> = store.timers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);

        let reopened = store_in(&dir);
        let names: Vec<_> = reopened.timers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn move_timer_clamps_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for name in ["a", "b"] {
            store.add(record(name)).unwrap();
        }
        store.move_timer(0, 99).unwrap();
        let names: Vec<_> = store.timers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        // Empty store is a no-op
        let mut empty = TimerStore::open(dir.path().join("other.json"));
        empty.move_timer(0, 1).unwrap();
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add(record("Launch Day")).unwrap();
        assert!(store.find_by_name("launch day").is_some());
        assert!(store.find_by_name("nope").is_none());
    }

    #[test]
    fn stored_glow_out_of_range_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        let json = r#"[{
            "id": "6a3cf74a-96ab-4d2f-8d8f-93f0b08e2ab5",
            "name": "x",
            "targetDate": "2030-01-01T00:00",
            "glowIntensity": 7.0
        }]"#;
        fs::write(&path, json).unwrap();
        let store = TimerStore::open(path);
        assert_eq!(store.timers()[0].glow_intensity, 1.0);
    }

    #[test]
    fn resolve_path_prefers_configured_dir() {
        let configured = PathBuf::from("/tmp/custom");
        let path = TimerStore::resolve_path(Some(&configured)).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom").join(STORE_FILE));
    }
}
