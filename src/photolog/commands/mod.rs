use crate::calendar::{GridCell, WeekStart};
use crate::config::JournalConfig;
use crate::model::{DayKey, Entry};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub mod add;
pub mod config;
pub mod delete;
pub mod month;
pub mod seed;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One day's bucket, as handed to a renderer.
#[derive(Debug, Clone)]
pub struct DayEntries {
    pub day: DayKey,
    pub entries: Vec<Entry>,
}

/// A renderable month: the grid matrix plus per-day entry counts.
#[derive(Debug, Clone)]
pub struct MonthSheet {
    pub anchor: NaiveDate,
    pub week_start: WeekStart,
    pub weeks: Vec<Vec<GridCell>>,
    pub counts: BTreeMap<DayKey, usize>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub days: Vec<DayEntries>,
    pub sheet: Option<MonthSheet>,
    pub config: Option<JournalConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_days(mut self, days: Vec<DayEntries>) -> Self {
        self.days = days;
        self
    }

    pub fn with_sheet(mut self, sheet: MonthSheet) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_config(mut self, config: JournalConfig) -> Self {
        self.config = Some(config);
        self
    }
}
