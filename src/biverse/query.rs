//! # Query Engine
//!
//! Stateless selection over a verse slice. Nothing here owns data, remembers previous
//! calls, reads the clock or draws from an ambient random source: the collection, the
//! query, the random generator and the calendar day are all passed in.
//!
//! Filters return clones in the collection's original relative order and never touch the
//! input. Matching is always on trimmed, lower-cased strings.

use crate::error::{BiverseError, Result};
use crate::model::{normalize, Verse};
use rand::seq::IndexedRandom;
use rand::Rng;

pub const NO_EMOTION_MATCH: &str = "No verse found for this emotion.";
pub const NO_KEYWORD_MATCH: &str = "No verse found for this search.";
pub const NO_CANDIDATES: &str = "No verses to choose from.";

/// Verses whose emotion equals `emotion` after trimming and lower-casing both sides.
///
/// An empty (or whitespace-only) emotion means nothing has been selected yet, so the
/// result is empty rather than the whole collection.
pub fn filter_by_emotion(verses: &[Verse], emotion: &str) -> Vec<Verse> {
    let wanted = normalize(emotion);
    if wanted.is_empty() {
        return Vec::new();
    }
    verses
        .iter()
        .filter(|v| normalize(&v.emotion) == wanted)
        .cloned()
        .collect()
}

/// Verses whose text or reference contains `keyword`, case-insensitively.
pub fn filter_by_keyword(verses: &[Verse], keyword: &str) -> Result<Vec<Verse>> {
    let term = normalize(keyword);
    if term.is_empty() {
        return Err(BiverseError::EmptyQuery);
    }
    Ok(verses
        .iter()
        .filter(|v| {
            v.text.to_lowercase().contains(&term) || v.reference.to_lowercase().contains(&term)
        })
        .cloned()
        .collect())
}

/// One verse drawn uniformly from `candidates`.
pub fn pick_random<R: Rng + ?Sized>(candidates: &[Verse], rng: &mut R) -> Result<Verse> {
    candidates
        .choose(rng)
        .cloned()
        .ok_or_else(|| BiverseError::NoMatch(NO_CANDIDATES.to_string()))
}

/// Deterministic pick for a calendar day: index `day mod len`.
pub fn daily_verse(verses: &[Verse], calendar_day: u32) -> Result<Verse> {
    if verses.is_empty() {
        return Err(BiverseError::EmptyCollection);
    }
    let index = calendar_day as usize % verses.len();
    Ok(verses[index].clone())
}
