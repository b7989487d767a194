use crate::collection::VerseCollection;
use crate::commands::{display_verses, CmdMessage, CmdResult};
use crate::error::{BiverseError, Result};
use crate::favorites::FavoriteSet;
use crate::query::{self, NO_KEYWORD_MATCH};
use rand::RngCore;

/// List every verse whose text or reference contains `keyword`.
pub fn run(
    collection: &VerseCollection,
    favorites: &FavoriteSet,
    keyword: &str,
) -> Result<CmdResult> {
    let matches = match query::filter_by_keyword(collection.verses(), keyword) {
        Ok(matches) => matches,
        Err(e) => return CmdResult::from_query_error(e),
    };

    let count = matches.len();
    let mut result = CmdResult::default().with_listed_verses(display_verses(matches, favorites));
    if count == 0 {
        result.add_message(CmdMessage::info(NO_KEYWORD_MATCH));
    }
    Ok(result)
}

/// One random verse among the keyword matches.
pub fn pick(
    collection: &VerseCollection,
    favorites: &FavoriteSet,
    keyword: &str,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    let picked = query::filter_by_keyword(collection.verses(), keyword).and_then(|matches| {
        query::pick_random(&matches, rng)
            .map_err(|_| BiverseError::NoMatch(NO_KEYWORD_MATCH.to_string()))
    });

    match picked {
        Ok(verse) => {
            Ok(CmdResult::default().with_listed_verses(display_verses([verse], favorites)))
        }
        Err(e) => CmdResult::from_query_error(e),
    }
}
