use crate::commands::{CmdMessage, CmdResult, DayEntries};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::DayKey;
use crate::store::DataStore;
use crate::viewer::EntryPager;

/// Entries filed under `day`. A day with none yields an empty result
/// with no messages; that is the viewer's silent-no-op contract, not an
/// error.
pub fn run<S: DataStore>(store: &S, day: DayKey) -> Result<CmdResult> {
    let journal = Journal::load(store);
    let pager = EntryPager::open(&journal, day);

    let mut result = CmdResult::default();
    if let Some((position, total)) = pager.position() {
        result.add_message(CmdMessage::info(format!(
            "Entry {} of {} in the journal",
            position, total
        )));
    } else {
        return Ok(result.with_days(vec![DayEntries {
            day,
            entries: Vec::new(),
        }]));
    }

    let entries = pager
        .current_day_items()
        .into_iter()
        .map(|item| item.entry.clone())
        .collect();
    Ok(result.with_days(vec![DayEntries { day, entries }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_the_whole_bucket_with_a_position_message() {
        let fixture = StoreFixture::new()
            .with_entry_on("2025-01-03")
            .with_entries_on("2025-01-10", 2);

        let result = run(&fixture.store, "2025-01-10".parse().unwrap()).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.days[0].entries.len(), 2);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("2 of 3"));
    }

    #[test]
    fn empty_day_is_silent() {
        let fixture = StoreFixture::new().with_entry_on("2025-01-03");
        let result = run(&fixture.store, "2025-06-01".parse().unwrap()).unwrap();
        assert!(result.days[0].entries.is_empty());
        assert!(result.messages.is_empty());
    }
}
