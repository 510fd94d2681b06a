//! # Storage Layer
//!
//! The persisted state is a single flat blob: every entry in one JSON
//! array, read and rewritten whole on each mutation. The [`DataStore`]
//! trait abstracts where that blob lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, `journal.json` in the data
//!   directory, pretty-printed.
//! - [`memory::InMemoryStore`]: in-memory blob for tests, no
//!   persistence.
//!
//! ## Consistency
//!
//! There is no locking and no version field. Mutations follow a
//! reload-before-write protocol at full-collection granularity (see
//! [`crate::journal::Journal::add`]): the blob is re-read, the change
//! applied, and the whole collection written back. Concurrent writers
//! are last-write-wins.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

/// Abstract interface over the persisted entry blob.
pub trait DataStore {
    /// Read the full collection. An absent blob is an empty collection;
    /// an unparseable one is a `Serialization` error (callers that want
    /// the degrade-to-empty behavior go through `Journal::load`).
    fn load_entries(&self) -> Result<Vec<Entry>>;

    /// Replace the full collection.
    fn save_entries(&mut self, entries: &[Entry]) -> Result<()>;
}
