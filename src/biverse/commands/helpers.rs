use crate::error::{BiverseError, Result};
use crate::favorites::FavoriteSet;
use crate::model::{normalize, Verse};

/// First verse whose reference matches, ignoring case and surrounding whitespace.
pub fn find_by_reference<'a>(verses: &'a [Verse], reference: &str) -> Result<&'a Verse> {
    let wanted = normalize(reference);
    if wanted.is_empty() {
        return Err(BiverseError::Api("Reference cannot be empty".to_string()));
    }
    verses
        .iter()
        .find(|v| normalize(&v.reference) == wanted)
        .ok_or_else(|| BiverseError::Api(format!("No verse with reference {}", reference.trim())))
}

/// Resolve a favorite from its list index (1-based) or its reference.
pub fn resolve_favorite(favorites: &FavoriteSet, selector: &str) -> Result<Verse> {
    if let Ok(n) = selector.trim().parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| favorites.all().get(i))
            .cloned()
            .ok_or_else(|| BiverseError::Api(format!("Favorite {} not found", n)));
    }
    find_by_reference(favorites.all(), selector)
        .cloned()
        .map_err(|_| BiverseError::Api(format!("{} is not a favorite", selector.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verses() -> Vec<Verse> {
        vec![
            Verse::new("Hope", "Jeremiah 29:11", "For I know"),
            Verse::new("Fear", "Isaiah 41:10", "Fear thou not"),
        ]
    }

    #[test]
    fn finds_reference_case_insensitively() {
        let verses = verses();
        let found = find_by_reference(&verses, " isaiah 41:10").unwrap();
        assert_eq!(found.text, "Fear thou not");
    }

    #[test]
    fn unknown_or_blank_reference_is_an_error() {
        let verses = verses();
        assert!(find_by_reference(&verses, "John 3:16").is_err());
        assert!(find_by_reference(&verses, "  ").is_err());
    }

    #[test]
    fn resolves_favorites_by_index_or_reference() {
        let favorites = FavoriteSet::from_verses(verses());
        assert_eq!(resolve_favorite(&favorites, "2").unwrap().reference, "Isaiah 41:10");
        assert_eq!(
            resolve_favorite(&favorites, "jeremiah 29:11").unwrap().reference,
            "Jeremiah 29:11"
        );
        assert!(resolve_favorite(&favorites, "0").is_err());
        assert!(resolve_favorite(&favorites, "3").is_err());
        assert!(resolve_favorite(&favorites, "Psalm 23:1").is_err());
    }
}
