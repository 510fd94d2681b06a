use crate::calendar::{first_of_month, month_matrix, WeekStart};
use crate::commands::{CmdResult, MonthSheet};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::DayKey;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Build the renderable sheet for the month containing `date`: the
/// 7-wide grid plus entry counts for every day of that month holding
/// entries.
pub fn run<S: DataStore>(store: &S, date: NaiveDate, week_start: WeekStart) -> Result<CmdResult> {
    let anchor = first_of_month(date);
    let journal = Journal::load(store);

    let mut counts: BTreeMap<DayKey, usize> = BTreeMap::new();
    for (day, entries) in journal.buckets() {
        if crate::calendar::same_month(day.date(), anchor) {
            counts.insert(day, entries.len());
        }
    }

    Ok(CmdResult::default().with_sheet(MonthSheet {
        anchor,
        week_start,
        weeks: month_matrix(anchor, week_start),
        counts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sheet_counts_only_the_requested_month() {
        let fixture = StoreFixture::new()
            .with_entries_on("2025-01-10", 2)
            .with_entry_on("2025-01-31")
            .with_entry_on("2025-02-01");

        let result = run(&fixture.store, ymd(2025, 1, 20), WeekStart::Sunday).unwrap();
        let sheet = result.sheet.unwrap();

        assert_eq!(sheet.anchor, ymd(2025, 1, 1));
        assert_eq!(sheet.counts.len(), 2);
        assert_eq!(sheet.counts[&"2025-01-10".parse::<DayKey>().unwrap()], 2);
        assert!(!sheet
            .counts
            .contains_key(&"2025-02-01".parse::<DayKey>().unwrap()));
    }

    #[test]
    fn empty_journal_still_produces_a_grid() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, ymd(2025, 6, 1), WeekStart::Monday).unwrap();
        let sheet = result.sheet.unwrap();
        assert!(sheet.counts.is_empty());
        assert!(!sheet.weeks.is_empty());
    }
}
