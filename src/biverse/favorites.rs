//! # Favorites Set
//!
//! A user-curated subset of verses. Membership is keyed by `(reference, text)`; the
//! emotion label is carried along for display but never compared. Members keep the
//! order in which they were added.
//!
//! [`FavoriteSet`] is the in-memory set only. Persisting it after each change is the job
//! of [`crate::commands::favorites`], which writes the whole set under
//! [`FAVORITES_KEY`] on every mutation.

use crate::error::{BiverseError, Result};
use crate::model::Verse;
use serde_json::Value;

/// Storage key holding the JSON-encoded favorites array.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    verses: Vec<Verse>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list, dropping later duplicates.
    pub fn from_verses<I: IntoIterator<Item = Verse>>(verses: I) -> Self {
        let mut set = Self::new();
        for verse in verses {
            set.add(verse);
        }
        set
    }

    /// Decode the persisted form. Entries that do not decode as a verse are dropped so
    /// that one bad record never costs the rest of the set.
    pub fn from_json(json: &str) -> Result<Self> {
        let Value::Array(entries) = serde_json::from_str::<Value>(json)? else {
            return Err(BiverseError::Persistence(
                "favorites are not a JSON array".to_string(),
            ));
        };

        let total = entries.len();
        let mut verses = Vec::with_capacity(total);
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Verse>(entry) {
                Ok(verse) => verses.push(verse),
                Err(e) => log::warn!("Skipping favorite entry {}: {}", position, e),
            }
        }
        if verses.len() < total {
            log::warn!("Kept {} of {} stored favorites", verses.len(), total);
        }
        Ok(Self::from_verses(verses))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.verses)?)
    }

    fn position(&self, verse: &Verse) -> Option<usize> {
        self.verses.iter().position(|v| v.same_identity(verse))
    }

    pub fn contains(&self, verse: &Verse) -> bool {
        self.position(verse).is_some()
    }

    /// Returns true when the verse was inserted.
    pub fn add(&mut self, verse: Verse) -> bool {
        if self.contains(&verse) {
            return false;
        }
        self.verses.push(verse);
        true
    }

    /// Returns true when a member was removed.
    pub fn remove(&mut self, verse: &Verse) -> bool {
        match self.position(verse) {
            Some(idx) => {
                self.verses.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns true when the verse is a member afterwards.
    pub fn toggle(&mut self, verse: Verse) -> bool {
        if self.remove(&verse) {
            false
        } else {
            self.add(verse)
        }
    }

    pub fn all(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Same members regardless of order.
    pub fn same_members(&self, other: &FavoriteSet) -> bool {
        self.len() == other.len() && self.verses.iter().all(|v| other.contains(v))
    }
}
