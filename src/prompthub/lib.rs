//! # PromptHub Architecture
//!
//! PromptHub is a **UI-agnostic gallery library** for AI-generated works. The terminal
//! client in `main.rs` is one consumer of it; a web front end or a request handler could
//! be another without touching anything below the API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: listing, liking, uploading, seeding      │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, prompt.rs, layout.rs, tools.rs)            │
//! │  - Pure types and algorithms, no I/O at all                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots In, Snapshots Out
//!
//! Every transformation over works takes a slice and hands back a new `Vec`. Nothing in
//! the core mutates a collection it was given. The store (or whatever the caller uses to
//! hold state) owns the current collection and commits the new snapshot.
//!
//! ## The Derivation Pipeline
//!
//! A listing is always computed the same way, eagerly and from scratch:
//!
//! 1. [`commands::filter::filter_by_tool`]
//! 2. [`commands::filter::filter_by_search`]
//! 3. [`commands::sort::sort_works`]
//!
//! Sorting is stable and runs last, so ties keep the filtered set's order.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Work`, `User`, `ToolType`, `Platform`)
//! - [`prompt`]: Prompt segmentation and tag parsing
//! - [`layout`]: Masonry column distribution
//! - [`tools`]: Static tool descriptor table
//! - [`seed`]: Sample users, works and platforms
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod prompt;
pub mod seed;
pub mod store;
pub mod tools;
