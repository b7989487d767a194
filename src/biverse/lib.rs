//! # Biverse Architecture
//!
//! Biverse finds a Bible verse for the way you feel. It is a **library with a CLI client**:
//! everything from `api.rs` inward is UI-agnostic, and the binary is one possible front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints verses and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: collection, favorites, store, rng      │
//! │  - Resolves references and favorite indexes to verses       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns `CmdResult`          │
//! │  - Turns recoverable failures into inline messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (collection, query, favorites, preference, store)     │
//! │  - Verse loading, pure selection, favorites set semantics   │
//! │  - KeyValueStore: FileStore (production), InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverable Errors
//!
//! An empty keyword, an emotion without verses or an empty collection are user
//! situations, not failures: commands report them as [`api::CmdMessage`]s. Storage
//! problems while reading favorites or the theme fall back to defaults, and failed writes
//! come back as warnings while the in-memory state is kept. Only a data source that cannot
//! be loaded at all is fatal, and only to the CLI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`collection`]: Loading and validating the verse corpus
//! - [`query`]: Filtering and selection over verses
//! - [`favorites`]: The favorites set and its persisted form
//! - [`preference`]: Theme persistence
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Verse`, `Theme` and the emotion catalog
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod preference;
pub mod query;
pub mod store;
