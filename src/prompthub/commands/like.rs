use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Work;
use crate::store::DataStore;

/// Maps the like toggle over the work with `id`. An unknown id leaves the snapshot as is.
pub fn toggle_in(works: &[Work], id: &str) -> Vec<Work> {
    works
        .iter()
        .map(|w| {
            if w.id == id {
                w.with_like_toggled()
            } else {
                w.clone()
            }
        })
        .collect()
}

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let work = store.get_work(id)?.with_like_toggled();
    store.save_work(&work)?;
    tracing::info!(id, liked = work.is_liked, likes = work.likes, "toggled like");

    let verb = if work.is_liked { "Liked" } else { "Unliked" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} {} ({} likes)",
        verb, work.title, work.likes
    )));
    Ok(result.with_affected_works(vec![work]))
}
