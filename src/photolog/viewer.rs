//! Sequential navigation over every entry in the journal, the logic
//! behind the day-tap viewer: entries are flattened day by day into one
//! ordered list and stepped through with clamped next/prev moves.

use crate::journal::Journal;
use crate::model::{DayKey, Entry};

#[derive(Debug, Clone)]
pub struct PagerItem {
    pub day: DayKey,
    pub entry: Entry,
}

/// A cursor over the flattened journal.
///
/// Opening the pager on a day with no entries yields an empty cursor:
/// `current()` answers `None` and moves are no-ops. That is deliberate,
/// not an error; the viewer simply shows nothing.
#[derive(Debug)]
pub struct EntryPager {
    items: Vec<PagerItem>,
    cursor: Option<usize>,
}

impl EntryPager {
    /// Flatten `journal` in day order and place the cursor on the first
    /// entry filed under `start`.
    pub fn open(journal: &Journal, start: DayKey) -> Self {
        let items: Vec<PagerItem> = journal
            .buckets()
            .flat_map(|(day, entries)| {
                entries.iter().map(move |entry| PagerItem {
                    day,
                    entry: entry.clone(),
                })
            })
            .collect();
        let cursor = items.iter().position(|item| item.day == start);
        Self { items, cursor }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&PagerItem> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    /// One-based position of the cursor, for "entry 3 of 12" displays.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.map(|i| (i + 1, self.items.len()))
    }

    /// Step forward, clamped at the last entry.
    pub fn next(&mut self) -> Option<&PagerItem> {
        if let Some(i) = self.cursor {
            self.cursor = Some((i + 1).min(self.items.len().saturating_sub(1)));
        }
        self.current()
    }

    /// Step backward, clamped at the first entry.
    pub fn prev(&mut self) -> Option<&PagerItem> {
        if let Some(i) = self.cursor {
            self.cursor = Some(i.saturating_sub(1));
        }
        self.current()
    }

    /// Every item on the cursor's day, in insertion order.
    pub fn current_day_items(&self) -> Vec<&PagerItem> {
        match self.current() {
            Some(item) => {
                let day = item.day;
                self.items.iter().filter(|i| i.day == day).collect()
            }
            None => Vec::new(),
        }
    }
}
