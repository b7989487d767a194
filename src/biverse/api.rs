//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every UI. It owns the session state the commands work on:
//!
//! - the loaded [`VerseCollection`] (read-only for the whole session)
//! - the [`FavoriteSet`], restored from storage when the API is created
//! - the [`KeyValueStore`] favorites and the theme are persisted to
//! - the random source used for random picks
//!
//! ## Explicit State
//!
//! Nothing is ambient: the current day is a parameter of [`BiverseApi::daily`], and the
//! random generator is injected with [`BiverseApi::with_rng`] (thread-local by default),
//! so a seeded generator makes every pick reproducible in tests.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `BiverseApi<FileStore>`
//! - Testing: `BiverseApi<InMemoryStore>`

use crate::collection::VerseCollection;
use crate::commands;
use crate::commands::helpers::{find_by_reference, resolve_favorite};
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::model::{Theme, Verse};
use crate::store::KeyValueStore;
use rand::RngCore;

pub struct BiverseApi<S: KeyValueStore> {
    collection: VerseCollection,
    store: S,
    favorites: FavoriteSet,
    rng: Box<dyn RngCore>,
    paths: commands::BiversePaths,
}

impl<S: KeyValueStore> BiverseApi<S> {
    pub fn new(collection: VerseCollection, store: S, paths: commands::BiversePaths) -> Self {
        let favorites = commands::favorites::load(&store);
        Self {
            collection,
            store,
            favorites,
            rng: Box::new(rand::rng()),
            paths,
        }
    }

    pub fn with_rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn collection(&self) -> &VerseCollection {
        &self.collection
    }

    pub fn find_by_emotion(&mut self, emotion: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.collection, &self.favorites, emotion, self.rng.as_mut())
    }

    pub fn search(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.collection, &self.favorites, keyword)
    }

    pub fn search_random(&mut self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::pick(&self.collection, &self.favorites, keyword, self.rng.as_mut())
    }

    pub fn daily(&self, calendar_day: u32) -> Result<commands::CmdResult> {
        commands::daily::run(&self.collection, &self.favorites, calendar_day)
    }

    pub fn random(&mut self) -> Result<commands::CmdResult> {
        commands::random::run(&self.collection, &self.favorites, self.rng.as_mut())
    }

    pub fn emotions(&self) -> Result<commands::CmdResult> {
        commands::emotions::run(&self.collection)
    }

    pub fn favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.favorites)
    }

    pub fn is_favorite(&self, verse: &Verse) -> bool {
        self.favorites.contains(verse)
    }

    pub fn add_favorite(&mut self, verse: Verse) -> Result<commands::CmdResult> {
        commands::favorites::add(&mut self.store, &mut self.favorites, verse)
    }

    pub fn remove_favorite(&mut self, verse: &Verse) -> Result<commands::CmdResult> {
        commands::favorites::remove(&mut self.store, &mut self.favorites, verse)
    }

    pub fn toggle_favorite(&mut self, verse: Verse) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&mut self.store, &mut self.favorites, verse)
    }

    /// Add the collection verse with this reference.
    pub fn add_favorite_by_reference(&mut self, reference: &str) -> Result<commands::CmdResult> {
        let verse = find_by_reference(self.collection.verses(), reference)?.clone();
        self.add_favorite(verse)
    }

    /// Remove a favorite given its list index or reference.
    pub fn remove_favorite_by_selector(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let verse = resolve_favorite(&self.favorites, selector)?;
        self.remove_favorite(&verse)
    }

    /// Toggle the collection verse with this reference.
    pub fn toggle_favorite_by_reference(
        &mut self,
        reference: &str,
    ) -> Result<commands::CmdResult> {
        let verse = find_by_reference(self.collection.verses(), reference)?.clone();
        self.toggle_favorite(verse)
    }

    pub fn theme(&self) -> Result<commands::CmdResult> {
        commands::theme::show(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<commands::CmdResult> {
        commands::theme::set(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<commands::CmdResult> {
        commands::theme::toggle(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::BiversePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    BiversePaths, CmdMessage, CmdResult, DisplayVerse, EmotionCount, MessageLevel,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BiverseError;
    use crate::favorites::FAVORITES_KEY;
    use crate::store::memory::InMemoryStore;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::path::PathBuf;

    fn hope_collection() -> VerseCollection {
        VerseCollection::from_json_str(
            r#"[
                {"Emotion": "Hope", "Reference": "Jeremiah 29:11", "Verse": "For I know the thoughts"},
                {"Emotion": "Hope", "Reference": "Isaiah 40:31", "Verse": "They that wait upon the LORD"}
            ]"#,
        )
        .unwrap()
    }

    fn api_with(store: InMemoryStore) -> BiverseApi<InMemoryStore> {
        let paths = BiversePaths {
            data_dir: PathBuf::from("/nonexistent"),
        };
        BiverseApi::new(hope_collection(), store, paths).with_rng(Pcg32::seed_from_u64(11))
    }

    #[test]
    fn end_to_end_hope_scenario() {
        let mut api = api_with(InMemoryStore::new());

        let daily = api.daily(3).unwrap();
        assert_eq!(daily.listed_verses[0].verse.reference, "Isaiah 40:31");

        let mut jeremiah = 0;
        for _ in 0..2_000 {
            let found = api.find_by_emotion("hope").unwrap();
            if found.listed_verses[0].verse.reference == "Jeremiah 29:11" {
                jeremiah += 1;
            }
        }
        assert!((800..=1_200).contains(&jeremiah), "jeremiah picked {}", jeremiah);
    }

    #[test]
    fn favorites_are_restored_from_store() {
        let store = InMemoryStore::new().with_value(
            FAVORITES_KEY,
            r#"[{"Reference": "Isaiah 40:31", "Verse": "They that wait upon the LORD"}]"#,
        );
        let api = api_with(store);
        let listed = api.favorites().unwrap().listed_verses;
        assert_eq!(listed.len(), 1);

        let isaiah = api.collection().verses()[1].clone();
        assert!(api.is_favorite(&isaiah));
        assert!(api.daily(1).unwrap().listed_verses[0].is_favorite);
    }

    #[test]
    fn favorite_by_reference_round_trip() {
        let mut api = api_with(InMemoryStore::new());
        api.add_favorite_by_reference("jeremiah 29:11").unwrap();
        api.add_favorite_by_reference("Isaiah 40:31").unwrap();
        api.remove_favorite_by_selector("1").unwrap();

        let listed = api.favorites().unwrap().listed_verses;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].verse.reference, "Isaiah 40:31");
    }

    #[test]
    fn unknown_reference_is_an_api_error() {
        let mut api = api_with(InMemoryStore::new());
        let err = api.add_favorite_by_reference("John 3:16").unwrap_err();
        assert!(matches!(err, BiverseError::Api(_)));
    }

    #[test]
    fn theme_toggles_through_store() {
        let mut api = api_with(InMemoryStore::new());
        assert_eq!(api.theme().unwrap().theme, Some(Theme::Light));
        api.toggle_theme().unwrap();
        assert_eq!(api.theme().unwrap().theme, Some(Theme::Dark));
        api.set_theme(Theme::Light).unwrap();
        assert_eq!(api.theme().unwrap().theme, Some(Theme::Light));
    }

    #[test]
    fn config_dispatches_to_data_dir() {
        let api = api_with(InMemoryStore::new());
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(crate::config::BiverseConfig::default()));
        assert_eq!(api.paths().data_dir, PathBuf::from("/nonexistent"));
    }

    #[test]
    fn keyword_search_dispatches() {
        let mut api = api_with(InMemoryStore::new());
        assert_eq!(api.search("lord").unwrap().listed_verses.len(), 1);
        assert_eq!(api.search_random("LORD").unwrap().listed_verses.len(), 1);
        assert!(api.search("").unwrap().has_errors());
    }
}
