//! # Storage Layer
//!
//! Favorites and the theme preference are persisted through the [`KeyValueStore`]
//! trait: a string-keyed store of string values. Callers encode their own values
//! (`"light"`/`"dark"` for the theme, a JSON array for favorites), so a backend only
//! has to move strings around.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one file per key in the data directory,
//!   written atomically.
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with switches to simulate
//!   read and write failures.
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/biverse/
//! ├── config.json        # BiverseConfig
//! ├── theme              # light | dark
//! └── favorites          # [{"Emotion": .., "Reference": .., "Verse": ..}, ...]
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for persisted settings.
pub trait KeyValueStore {
    /// Read a value. Returns Ok(None) when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
