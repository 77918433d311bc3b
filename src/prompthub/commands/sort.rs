use crate::model::Work;
use serde::{Deserialize, Serialize};

/// Listing order. Both modes are descending and stable.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SortMode {
    /// Most recent `created_at` first.
    #[default]
    #[strum(to_string = "latest", serialize = "recency")]
    Latest,
    /// Most liked first.
    #[strum(to_string = "popular", serialize = "popularity")]
    Popular,
}

/// Returns a newly ordered copy; ties keep their input order.
pub fn sort_works(works: &[Work], mode: SortMode) -> Vec<Work> {
    let mut sorted = works.to_vec();
    match mode {
        SortMode::Latest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Popular => sorted.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
    sorted
}
