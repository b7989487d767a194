//! # Verse Store
//!
//! The verse collection is loaded once at startup and is read-only afterwards: there is no
//! API to add, remove or edit verses once a [`VerseCollection`] exists.
//!
//! ## Source Format
//!
//! ```text
//! [
//!   { "Emotion": "Hope", "Reference": "Jeremiah 29:11", "Verse": "For I know ..." },
//!   ...
//! ]
//! ```
//!
//! A source that is missing or is not a JSON array fails the whole load with
//! [`BiverseError::DataLoad`]. Individual entries that are not objects, lack one of the
//! three fields, or carry a non-string value are skipped; the rest of the corpus still
//! loads. The number of skipped entries is kept on the collection (see
//! [`VerseCollection::skipped`]) so callers can surface it.

use crate::error::{BiverseError, Result};
use crate::model::Verse;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// The corpus compiled into the binary, used when no data file is configured.
pub const BUNDLED_VERSES: &str = include_str!("../../data/verses.json");

/// Strict shape of one source entry. Unlike [`Verse`], every field is required.
#[derive(Deserialize)]
struct VerseRecord {
    #[serde(rename = "Emotion")]
    emotion: String,
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Verse")]
    text: String,
}

impl From<VerseRecord> for Verse {
    fn from(record: VerseRecord) -> Self {
        Verse {
            emotion: record.emotion,
            reference: record.reference,
            text: record.text,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerseCollection {
    verses: Vec<Verse>,
    skipped: usize,
}

impl VerseCollection {
    /// Build a collection from already validated verses.
    pub fn new(verses: Vec<Verse>) -> Self {
        Self { verses, skipped: 0 }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_VERSES)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BiverseError::DataLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| BiverseError::DataLoad(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| BiverseError::DataLoad(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(BiverseError::DataLoad(
                "expected a JSON array of verse objects".to_string(),
            ));
        };

        let total = entries.len();
        let mut verses = Vec::with_capacity(total);
        let mut skipped = 0;

        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<VerseRecord>(entry) {
                Ok(record) => verses.push(record.into()),
                Err(e) => {
                    log::debug!("Skipping verse entry {}: {}", position, e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {} of {} malformed verse entries", skipped, total);
        }
        log::debug!("Loaded {} verses", verses.len());

        Ok(Self { verses, skipped })
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Number of source entries rejected during load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a VerseCollection {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses.iter()
    }
}
