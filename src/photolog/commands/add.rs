use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::EntryDraft;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: EntryDraft) -> Result<CmdResult> {
    let (_, entry) = Journal::add(store, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry added to {} ({})",
        entry.day, entry.id
    )));
    Ok(result.with_affected_entries(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayKey;
    use crate::store::memory::fixtures::draft_on;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn persists_and_reports_the_new_entry() {
        let mut store = InMemoryStore::new();
        let day = DayKey::from_ymd(2025, 1, 15).unwrap();
        let result = run(&mut store, draft_on(day)).unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        assert_eq!(result.affected_entries[0].day, day);
        assert_eq!(Journal::load(&store).count_on(day), 1);
    }

    #[test]
    fn invalid_draft_saves_nothing() {
        let mut store = InMemoryStore::new();
        let mut bad = draft_on(DayKey::from_ymd(2025, 1, 15).unwrap());
        bad.image_url.clear();
        assert!(run(&mut store, bad).is_err());
        assert!(Journal::load(&store).is_empty());
    }
}
