use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::seed::sample_works;
use crate::store::DataStore;

/// Seeds the store with the sample collection.
///
/// A store that already holds works is left alone unless `force` is set, in which case
/// its contents are replaced.
pub fn run<S: DataStore>(store: &mut S, force: bool) -> Result<CmdResult> {
    let existing = store.list_works()?.len();
    let mut result = CmdResult::default();

    if existing > 0 && !force {
        result.add_message(CmdMessage::warning(format!(
            "Gallery already has {} works; use --force to replace them",
            existing
        )));
        return Ok(result);
    }

    let works = sample_works();
    store.replace_all(&works)?;
    tracing::info!(count = works.len(), replaced = existing, "seeded gallery");

    result.add_message(CmdMessage::success(format!(
        "Initialized gallery with {} sample works",
        works.len()
    )));
    Ok(result.with_affected_works(works))
}
