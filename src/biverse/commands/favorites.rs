//! Favorites mutations with write-through persistence.
//!
//! Every mutating call writes the whole set under [`FAVORITES_KEY`]. A failed write is
//! logged and reported as a warning on the result; the in-memory change stands, so the
//! running session stays correct even when storage is unavailable.

use crate::commands::{display_verses, CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::{FavoriteSet, FAVORITES_KEY};
use crate::model::Verse;
use crate::store::KeyValueStore;

/// Restore favorites from storage, falling back to an empty set.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> FavoriteSet {
    match store.get(FAVORITES_KEY) {
        Ok(Some(json)) => FavoriteSet::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable favorites: {}", e);
            FavoriteSet::new()
        }),
        Ok(None) => FavoriteSet::new(),
        Err(e) => {
            log::warn!("Could not read favorites: {}", e);
            FavoriteSet::new()
        }
    }
}

fn persist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    favorites: &FavoriteSet,
    result: &mut CmdResult,
) {
    let written = favorites
        .to_json()
        .and_then(|json| store.set(FAVORITES_KEY, &json));
    if let Err(e) = written {
        log::warn!("Favorites not saved: {}", e);
        result.add_message(CmdMessage::warning(format!("Favorites not saved: {}", e)));
    }
}

pub fn list(favorites: &FavoriteSet) -> Result<CmdResult> {
    let listed = display_verses(favorites.all().to_vec(), favorites);
    let mut result = CmdResult::default().with_listed_verses(listed);
    if favorites.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet."));
    }
    Ok(result)
}

pub fn add<S: KeyValueStore + ?Sized>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    verse: Verse,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let reference = verse.reference.clone();
    if favorites.add(verse) {
        result.add_message(CmdMessage::success(format!("Added to favorites: {}", reference)));
    } else {
        result.add_message(CmdMessage::info(format!("Already a favorite: {}", reference)));
    }
    persist(store, favorites, &mut result);
    Ok(result)
}

pub fn remove<S: KeyValueStore + ?Sized>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    verse: &Verse,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if favorites.remove(verse) {
        result.add_message(CmdMessage::success(format!(
            "Removed from favorites: {}",
            verse.reference
        )));
    } else {
        result.add_message(CmdMessage::info(format!("Not a favorite: {}", verse.reference)));
    }
    persist(store, favorites, &mut result);
    Ok(result)
}

pub fn toggle<S: KeyValueStore + ?Sized>(
    store: &mut S,
    favorites: &mut FavoriteSet,
    verse: Verse,
) -> Result<CmdResult> {
    let reference = verse.reference.clone();
    let mut result = CmdResult::default();
    if favorites.toggle(verse) {
        result.add_message(CmdMessage::success(format!("Added to favorites: {}", reference)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed from favorites: {}",
            reference
        )));
    }
    persist(store, favorites, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    fn v1() -> Verse {
        Verse::new("Hope", "Jeremiah 29:11", "For I know")
    }

    fn v2() -> Verse {
        Verse::new("Hope", "Isaiah 40:31", "They that wait")
    }

    #[test]
    fn mutations_write_through() {
        let mut store = InMemoryStore::new();
        let mut favorites = FavoriteSet::new();
        add(&mut store, &mut favorites, v1()).unwrap();
        add(&mut store, &mut favorites, v2()).unwrap();
        remove(&mut store, &mut favorites, &v1()).unwrap();

        assert_eq!(favorites.all(), &[v2()]);
        let restored = load(&store);
        assert_eq!(restored.all(), &[v2()]);
    }

    #[test]
    fn round_trips_through_storage() {
        let mut store = InMemoryStore::new();
        let mut favorites = FavoriteSet::new();
        add(&mut store, &mut favorites, v1()).unwrap();
        add(&mut store, &mut favorites, v2()).unwrap();
        assert!(load(&store).same_members(&favorites));
    }

    #[test]
    fn toggle_twice_restores_persisted_state() {
        let mut store = InMemoryStore::new();
        let mut favorites = FavoriteSet::new();
        toggle(&mut store, &mut favorites, v1()).unwrap();
        assert!(load(&store).contains(&v1()));
        toggle(&mut store, &mut favorites, v1()).unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn duplicate_add_is_reported_as_info() {
        let mut store = InMemoryStore::new();
        let mut favorites = FavoriteSet::new();
        add(&mut store, &mut favorites, v1()).unwrap();
        let result = add(&mut store, &mut favorites, v1()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn write_failure_keeps_in_memory_change() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut favorites = FavoriteSet::new();

        let result = add(&mut store, &mut favorites, v1()).unwrap();
        assert!(favorites.contains(&v1()));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert!(load(&store).is_empty());
    }

    #[test]
    fn unreadable_storage_loads_empty() {
        let store = InMemoryStore::new().with_value(FAVORITES_KEY, "{not json");
        assert!(load(&store).is_empty());

        let mut failing = InMemoryStore::new().with_value(FAVORITES_KEY, "[]");
        failing.set_simulate_read_error(true);
        assert!(load(&failing).is_empty());
    }

    #[test]
    fn malformed_entry_does_not_erase_stored_favorites() {
        let mut store = InMemoryStore::new().with_value(
            FAVORITES_KEY,
            r#"[{"Reference": "Jeremiah 29:11", "Verse": "For I know"}, {"Reference": "John 3:16"}]"#,
        );
        let mut favorites = load(&store);
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(&v1()));

        add(&mut store, &mut favorites, v2()).unwrap();
        let restored = load(&store);
        assert!(restored.contains(&v1()));
        assert!(restored.contains(&v2()));
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn list_marks_every_entry_as_favorite() {
        let favorites = FavoriteSet::from_verses([v1(), v2()]);
        let result = list(&favorites).unwrap();
        assert_eq!(result.listed_verses.len(), 2);
        assert!(result.listed_verses.iter().all(|dv| dv.is_favorite));
        assert!(list(&FavoriteSet::new()).unwrap().messages[0]
            .content
            .contains("No favorites"));
    }
}
