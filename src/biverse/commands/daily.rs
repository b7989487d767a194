use crate::collection::VerseCollection;
use crate::commands::{display_verses, CmdResult};
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::query;

/// The verse of the day for `calendar_day` (day of month, supplied by the caller).
pub fn run(
    collection: &VerseCollection,
    favorites: &FavoriteSet,
    calendar_day: u32,
) -> Result<CmdResult> {
    match query::daily_verse(collection.verses(), calendar_day) {
        Ok(verse) => {
            Ok(CmdResult::default().with_listed_verses(display_verses([verse], favorites)))
        }
        Err(e) => CmdResult::from_query_error(e),
    }
}
