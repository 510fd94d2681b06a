//! The date-keyed entry store: buckets of entries per calendar day,
//! hydrated from the persisted blob and rewritten whole on mutation.

use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{JournalError, Result};
use crate::model::{DayKey, Entry, EntryDraft};
use crate::store::DataStore;

/// In-memory view of the journal.
///
/// Invariants: every entry lives in exactly one bucket, the bucket
/// matching its day; a day with no entries has no bucket at all.
/// Within a bucket, insertion order is kept.
#[derive(Debug, Default)]
pub struct Journal {
    buckets: BTreeMap<DayKey, Vec<Entry>>,
}

impl Journal {
    /// Hydrate from the persisted blob. An absent or unparseable blob
    /// degrades to an empty journal, silently; this never fails.
    pub fn load<S: DataStore>(store: &S) -> Self {
        match store.load_entries() {
            Ok(entries) => Self::from_entries(entries),
            Err(_) => Self::default(),
        }
    }

    fn from_entries(entries: Vec<Entry>) -> Self {
        let mut buckets: BTreeMap<DayKey, Vec<Entry>> = BTreeMap::new();
        for entry in entries {
            buckets.entry(entry.day).or_default().push(entry);
        }
        Self { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of days holding at least one entry.
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn entries_on(&self, day: DayKey) -> &[Entry] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_on(&self, day: DayKey) -> usize {
        self.entries_on(day).len()
    }

    pub fn days(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.buckets.keys().copied()
    }

    pub fn buckets(&self) -> impl Iterator<Item = (DayKey, &[Entry])> + '_ {
        self.buckets.iter().map(|(day, v)| (*day, v.as_slice()))
    }

    fn flatten(&self) -> Vec<Entry> {
        self.buckets.values().flatten().cloned().collect()
    }

    /// Persist a new entry: validate, reload the blob, assign a fresh
    /// id, append to its day's bucket, and rewrite the whole
    /// collection. Returns the updated view and the stored entry.
    ///
    /// The reload makes concurrent writers last-write-wins at
    /// full-collection granularity; there is no merge.
    pub fn add<S: DataStore>(store: &mut S, draft: EntryDraft) -> Result<(Self, Entry)> {
        draft.validate()?;
        let mut journal = Self::load(store);
        let entry = Entry::from_draft(draft);
        journal
            .buckets
            .entry(entry.day)
            .or_default()
            .push(entry.clone());
        store.save_entries(&journal.flatten())?;
        Ok((journal, entry))
    }

    /// Remove the entry with `id`, dropping its bucket when that leaves
    /// the bucket empty, and rewrite the collection.
    pub fn delete<S: DataStore>(store: &mut S, id: Uuid) -> Result<(Self, Entry)> {
        let mut journal = Self::load(store);

        let mut removed = None;
        for (day, entries) in journal.buckets.iter_mut() {
            if let Some(pos) = entries.iter().position(|e| e.id == id) {
                removed = Some((*day, entries.remove(pos)));
                break;
            }
        }

        let (day, entry) = removed.ok_or(JournalError::EntryNotFound(id))?;
        if journal.entries_on(day).is_empty() {
            journal.buckets.remove(&day);
        }
        store.save_entries(&journal.flatten())?;
        Ok((journal, entry))
    }

    /// Populate an empty store from `drafts`, exactly once: a non-empty
    /// store is left untouched and `None` is returned.
    pub fn seed<S: DataStore>(store: &mut S, drafts: Vec<EntryDraft>) -> Result<Option<Self>> {
        if !Self::load(store).is_empty() {
            return Ok(None);
        }
        let entries: Vec<Entry> = drafts.into_iter().map(Entry::from_draft).collect();
        store.save_entries(&entries)?;
        Ok(Some(Self::from_entries(entries)))
    }
}
