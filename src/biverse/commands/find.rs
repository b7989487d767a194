use crate::collection::VerseCollection;
use crate::commands::{display_verses, CmdMessage, CmdResult};
use crate::error::{BiverseError, Result};
use crate::favorites::FavoriteSet;
use crate::query::{self, NO_EMOTION_MATCH};
use rand::RngCore;

pub const SELECT_EMOTION: &str = "Please select an emotion.";

/// Pick one verse at random among those tagged with `emotion`.
pub fn run(
    collection: &VerseCollection,
    favorites: &FavoriteSet,
    emotion: &str,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    if emotion.trim().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::error(SELECT_EMOTION)));
    }
    if collection.is_empty() {
        return CmdResult::from_query_error(BiverseError::EmptyCollection);
    }

    let candidates = query::filter_by_emotion(collection.verses(), emotion);
    log::debug!("{} candidates for emotion {:?}", candidates.len(), emotion);

    match query::pick_random(&candidates, rng) {
        Ok(verse) => {
            Ok(CmdResult::default().with_listed_verses(display_verses([verse], favorites)))
        }
        Err(BiverseError::NoMatch(_)) => {
            CmdResult::from_query_error(BiverseError::NoMatch(NO_EMOTION_MATCH.to_string()))
        }
        Err(e) => Err(e),
    }
}
