use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let work = store.get_work(id)?;
    store.delete_work(id)?;
    tracing::info!(id, "deleted work");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} ({})",
        work.title, work.id
    )));
    Ok(result.with_affected_works(vec![work]))
}
