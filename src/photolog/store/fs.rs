use super::DataStore;
use crate::error::{JournalError, Result};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};

const BLOB_FILENAME: &str = "journal.json";

/// File-backed store: the whole journal in one JSON file under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn blob_path(&self) -> PathBuf {
        self.root.join(BLOB_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(JournalError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_entries(&self) -> Result<Vec<Entry>> {
        let blob = self.blob_path();
        if !blob.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(blob).map_err(JournalError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(JournalError::Serialization)?;
        Ok(entries)
    }

    fn save_entries(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries).map_err(JournalError::Serialization)?;
        fs::write(self.blob_path(), content).map_err(JournalError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayKey, Entry, EntryDraft};

    fn draft(day: &str) -> EntryDraft {
        EntryDraft {
            day: day.parse().unwrap(),
            image_url: "https://img.example/a.png".to_string(),
            rating: 4.0,
            categories: vec!["x".to_string()],
            description: "d".to_string(),
        }
    }

    #[test]
    fn missing_blob_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let entry = Entry::from_draft(draft("2025-01-15"));
        store.save_entries(std::slice::from_ref(&entry)).unwrap();

        let loaded = store.load_entries().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, entry.id);
        assert_eq!(loaded[0].day, DayKey::from_ymd(2025, 1, 15).unwrap());
    }

    #[test]
    fn corrupt_blob_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_entries(&[]).unwrap();
        fs::write(store.blob_path(), "{ not json").unwrap();
        assert!(matches!(
            store.load_entries(),
            Err(JournalError::Serialization(_))
        ));
    }

    #[test]
    fn legacy_blob_with_us_dates_loads() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(BLOB_FILENAME),
            r#"[{
                "id": "0c5ad23e-27e8-4f5a-9b25-5e7f0a8f8f11",
                "date": "01/15/2025",
                "imgUrl": "https://img.example/a.png",
                "rating": 3.5,
                "categories": [],
                "description": ""
            }]"#,
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let loaded = store.load_entries().unwrap();
        assert_eq!(loaded[0].day, DayKey::from_ymd(2025, 1, 15).unwrap());
    }
}
