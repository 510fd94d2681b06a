//! # API Facade
//!
//! Thin facade over the command layer, the single entry point for all
//! journal operations regardless of the UI in front of it. It
//! dispatches, normalizes inputs, and returns structured
//! `Result<CmdResult>` values; business logic lives in `commands/*.rs`
//! and nothing here touches stdout or the terminal.
//!
//! `JournalApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::calendar::WeekStart;
use crate::commands;
use crate::error::Result;
use crate::model::{DayKey, EntryDraft};
use crate::store::DataStore;
use chrono::NaiveDate;
use std::path::PathBuf;
use uuid::Uuid;

pub struct JournalApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> JournalApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn delete_entry(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn view_day(&self, day: DayKey) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, day)
    }

    pub fn month_sheet(&self, date: NaiveDate, week_start: WeekStart) -> Result<commands::CmdResult> {
        commands::month::run(&self.store, date, week_start)
    }

    pub fn seed(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DayEntries, MessageLevel, MonthSheet};
