use crate::commands::filter::{filter_by_search, filter_by_tool, ToolSelector};
use crate::commands::sort::{sort_works, SortMode};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Work;
use crate::store::DataStore;

/// The three listing parameters a caller holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkFilter {
    pub tool: ToolSelector,
    pub search: String,
    pub sort: SortMode,
}

impl WorkFilter {
    pub fn new(tool: ToolSelector, search: impl Into<String>, sort: SortMode) -> Self {
        Self {
            tool,
            search: search.into(),
            sort,
        }
    }
}

/// Tool filter, then search filter, then sort. The order is fixed.
pub fn derive(works: &[Work], filter: &WorkFilter) -> Vec<Work> {
    let by_tool = filter_by_tool(works, &filter.tool);
    let by_search = filter_by_search(&by_tool, &filter.search);
    sort_works(&by_search, filter.sort)
}

pub fn run<S: DataStore>(store: &S, filter: &WorkFilter) -> Result<CmdResult> {
    let works = store.list_works()?;
    let listed = derive(&works, filter);
    tracing::debug!(
        total = works.len(),
        listed = listed.len(),
        tool = %filter.tool,
        sort = %filter.sort,
        "derived listing"
    );

    let mut result = CmdResult::default().with_listed_works(listed);
    if let ToolSelector::Unknown(name) = &filter.tool {
        result.add_message(CmdMessage::warning(format!("Unknown tool: {}", name)));
    }
    Ok(result)
}
