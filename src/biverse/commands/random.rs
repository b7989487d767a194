use crate::collection::VerseCollection;
use crate::commands::{display_verses, CmdResult};
use crate::error::{BiverseError, Result};
use crate::favorites::FavoriteSet;
use crate::query;
use rand::RngCore;

/// Any verse from the whole collection.
pub fn run(
    collection: &VerseCollection,
    favorites: &FavoriteSet,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    if collection.is_empty() {
        return CmdResult::from_query_error(BiverseError::EmptyCollection);
    }
    match query::pick_random(collection.verses(), rng) {
        Ok(verse) => {
            Ok(CmdResult::default().with_listed_verses(display_verses([verse], favorites)))
        }
        Err(e) => CmdResult::from_query_error(e),
    }
}
