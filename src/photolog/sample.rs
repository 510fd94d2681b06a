//! Bundled sample entries, used to populate an empty store exactly
//! once on first run.

use crate::error::Result;
use crate::model::EntryDraft;

const SAMPLE_JSON: &str = include_str!("../../data/sample_entries.json");

/// The bundled seed dataset, in the same shape as persisted entries
/// minus ids (ids are assigned when the seed is stored).
pub fn sample_entries() -> Result<Vec<EntryDraft>> {
    let drafts: Vec<EntryDraft> = serde_json::from_str(SAMPLE_JSON)?;
    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let drafts = sample_entries().unwrap();
        assert!(!drafts.is_empty());
        for draft in &drafts {
            draft.validate().unwrap();
        }
    }
}
