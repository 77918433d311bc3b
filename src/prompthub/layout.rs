//! Masonry column distribution.
//!
//! Items are dealt into columns round-robin: item `i` lands in column `i % n`. This is a
//! layout hint only; there is no balancing by item height, and a change of column count
//! simply redistributes from scratch.

use crate::error::{HubError, Result};

/// Viewport breakpoints (exclusive upper bounds) and the column count below each.
const BREAKPOINTS: [(u32, usize); 4] = [(640, 1), (768, 2), (1024, 3), (1280, 4)];
const MAX_COLUMNS: usize = 5;

/// Upper bound on an explicitly requested column count.
pub const MAX_GRID_COLUMNS: usize = 12;

/// Checks a requested column count against `1..=MAX_GRID_COLUMNS`.
pub fn check_columns(columns: usize) -> Result<usize> {
    if columns == 0 || columns > MAX_GRID_COLUMNS {
        return Err(HubError::InvalidArgument(format!(
            "column count must be between 1 and {}, got {}",
            MAX_GRID_COLUMNS, columns
        )));
    }
    Ok(columns)
}

pub fn distribute<I>(items: I, columns: usize) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    let columns = check_columns(columns)?;

    let mut buckets: Vec<Vec<I::Item>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        buckets[index % columns].push(item);
    }
    Ok(buckets)
}

/// Column count for a viewport `width` in pixels.
pub fn columns_for_width(width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(limit, _)| width < *limit)
        .map(|(_, columns)| *columns)
        .unwrap_or(MAX_COLUMNS)
}
