use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::sample;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let drafts = sample::sample_entries()?;
    let count = drafts.len();

    let mut result = CmdResult::default();
    match Journal::seed(store, drafts)? {
        Some(_) => result.add_message(CmdMessage::success(format!(
            "Seeded {} sample entries",
            count
        ))),
        None => result.add_message(CmdMessage::info(
            "Store already has entries; nothing seeded",
        )),
    }
    Ok(result)
}
