//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every gallery operation, whatever UI sits on top.
//!
//! It dispatches to the right command, supplies what the caller should not have to
//! thread through (the data directory, the configured viewer) and returns structured
//! `Result<CmdResult>` values. It holds no business logic, does no printing and makes no
//! presentation decisions.
//!
//! `GalleryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `GalleryApi<FileStore>`
//! - Testing: `GalleryApi<InMemoryStore>`
//!
//! API tests check dispatch and argument plumbing only; command behavior is tested in
//! `commands/*.rs`.

use crate::commands;
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for gallery operations.
pub struct GalleryApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> GalleryApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn list_works(&self, filter: &WorkFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_work(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn toggle_like(&mut self, id: &str) -> Result<CmdResult> {
        commands::like::run(&mut self.store, id)
    }

    pub fn upload_work(&mut self, draft: WorkDraft) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::upload::run(&mut self.store, draft, &config.viewer)
    }

    pub fn delete_work(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn favorites(&self, sort: SortMode) -> Result<CmdResult> {
        commands::space::favorites(&self.store, sort)
    }

    pub fn uploads(&self, sort: SortMode) -> Result<CmdResult> {
        let config = self.load_config()?;
        commands::space::uploads(&self.store, &config.viewer, sort)
    }

    pub fn platforms(&self) -> CmdResult {
        commands::platforms::platforms()
    }

    pub fn tools(&self) -> CmdResult {
        commands::platforms::tools()
    }

    pub fn init(&mut self, force: bool) -> Result<CmdResult> {
        commands::init::run(&mut self.store, force)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn load_config(&self) -> Result<GalleryConfig> {
        GalleryConfig::load(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::filter::ToolSelector;
pub use commands::list::WorkFilter;
pub use commands::sort::SortMode;
pub use commands::upload::WorkDraft;
pub use commands::{CmdMessage, CmdResult, MessageLevel, WorkDetail};
