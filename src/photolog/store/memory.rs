use super::DataStore;
use crate::error::Result;
use crate::model::Entry;

/// In-memory blob for testing and development. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save_entries(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DayKey, EntryDraft};

    pub fn draft_on(day: DayKey) -> EntryDraft {
        EntryDraft {
            day,
            image_url: "https://img.example/fixture.png".to_string(),
            rating: 3.0,
            categories: vec!["fixture".to_string()],
            description: "fixture entry".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry_on(mut self, day: &str) -> Self {
            let day: DayKey = day.parse().unwrap();
            let mut entries = self.store.load_entries().unwrap();
            entries.push(Entry::from_draft(draft_on(day)));
            self.store.save_entries(&entries).unwrap();
            self
        }

        pub fn with_entries_on(mut self, day: &str, count: usize) -> Self {
            for _ in 0..count {
                self = self.with_entry_on(day);
            }
            self
        }
    }
}
