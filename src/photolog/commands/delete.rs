use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let (journal, entry) = Journal::delete(store, id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry deleted from {} ({})",
        entry.day, entry.id
    )));
    if journal.count_on(entry.day) == 0 {
        result.add_message(CmdMessage::info(format!("{} is now empty", entry.day)));
    }
    Ok(result.with_affected_entries(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use crate::model::DayKey;
    use crate::store::memory::fixtures::draft_on;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_the_entry_and_reports_the_emptied_day() {
        let mut store = InMemoryStore::new();
        let day = DayKey::from_ymd(2025, 4, 4).unwrap();
        let (_, entry) = Journal::add(&mut store, draft_on(day)).unwrap();

        let result = run(&mut store, entry.id).unwrap();
        assert_eq!(result.affected_entries[0].id, entry.id);
        assert_eq!(result.messages.len(), 2);
        assert!(Journal::load(&store).is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, Uuid::new_v4()),
            Err(JournalError::EntryNotFound(_))
        ));
    }
}
