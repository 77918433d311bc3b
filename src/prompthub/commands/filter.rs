//! The two narrowing steps of the listing pipeline.
//!
//! Both are pure and order-preserving: they return the matching subsequence of their
//! input as a new `Vec` and never reorder.

use crate::model::{ToolType, Work};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const WILDCARD: &str = "all";

/// Which tool category a listing is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolSelector {
    /// No narrowing.
    #[default]
    All,
    Tool(ToolType),
    /// A name that is not a known tool. Matches nothing.
    Unknown(String),
}

impl FromStr for ToolSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name == WILDCARD {
            return Ok(Self::All);
        }
        Ok(match ToolType::from_str(&name) {
            Ok(tool) => Self::Tool(tool),
            Err(_) => Self::Unknown(s.to_string()),
        })
    }
}

impl fmt::Display for ToolSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Tool(tool) => write!(f, "{}", tool),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

impl From<ToolType> for ToolSelector {
    fn from(tool: ToolType) -> Self {
        Self::Tool(tool)
    }
}

pub fn filter_by_tool(works: &[Work], selector: &ToolSelector) -> Vec<Work> {
    match selector {
        ToolSelector::All => works.to_vec(),
        ToolSelector::Tool(tool) => works.iter().filter(|w| w.tool == *tool).cloned().collect(),
        ToolSelector::Unknown(_) => Vec::new(),
    }
}

/// Case-insensitive substring match over title, positive prompt and tags.
///
/// The negative prompt and the author are not searched.
pub fn filter_by_search(works: &[Work], query: &str) -> Vec<Work> {
    if query.is_empty() {
        return works.to_vec();
    }
    let query = query.to_lowercase();
    works
        .iter()
        .filter(|w| matches_query(w, &query))
        .cloned()
        .collect()
}

/// `query` must already be lowercased.
fn matches_query(work: &Work, query: &str) -> bool {
    work.title.to_lowercase().contains(query)
        || work.positive_prompt.to_lowercase().contains(query)
        || work.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
