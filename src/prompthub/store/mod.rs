//! # Storage Layer
//!
//! This module defines the storage abstraction for the gallery. The [`DataStore`] trait
//! lets the command layer work against any backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All works stored in one `works.json` array
//!   - Array order is store order
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering
//!
//! `list_works` returns works in store order: the order they were first saved in.
//! Saving an existing work replaces it in place. Sorting is stable, so store order is
//! the tie-break for equal timestamps or like counts and must not drift between calls.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data-dir>/
//! ├── works.json          # All works (JSON array, store order)
//! └── config.json         # Gallery configuration
//! ```

use crate::error::Result;
use crate::model::Work;

pub mod fs;
pub mod memory;

/// Abstract interface for work storage.
pub trait DataStore {
    /// Save a work: replace in place if the id exists, append otherwise
    fn save_work(&mut self, work: &Work) -> Result<()>;

    /// Get a work by id
    fn get_work(&self, id: &str) -> Result<Work>;

    /// List all works in store order
    fn list_works(&self) -> Result<Vec<Work>>;

    /// Remove a work permanently
    fn delete_work(&mut self, id: &str) -> Result<()>;

    /// Replace the whole collection
    fn replace_all(&mut self, works: &[Work]) -> Result<()>;
}
