//! "My space": the viewer's favorites and uploads.

use crate::commands::sort::{sort_works, SortMode};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Work;
use crate::store::DataStore;

pub fn favorites_of(works: &[Work]) -> Vec<Work> {
    works.iter().filter(|w| w.is_liked).cloned().collect()
}

pub fn uploads_of(works: &[Work], viewer: &str) -> Vec<Work> {
    works
        .iter()
        .filter(|w| w.author.id == viewer)
        .cloned()
        .collect()
}

pub fn favorites<S: DataStore>(store: &S, sort: SortMode) -> Result<CmdResult> {
    let works = store.list_works()?;
    let listed = sort_works(&favorites_of(&works), sort);
    Ok(CmdResult::default().with_listed_works(listed))
}

pub fn uploads<S: DataStore>(store: &S, viewer: &str, sort: SortMode) -> Result<CmdResult> {
    let works = store.list_works()?;
    let listed = sort_works(&uploads_of(&works, viewer), sort);
    Ok(CmdResult::default().with_listed_works(listed))
}
