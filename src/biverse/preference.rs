//! Theme preference persistence.
//!
//! Reading never fails: a missing, unreadable or unrecognised value falls back to
//! [`Theme::default`]. Only the exact strings written by [`set`] are recognised.

use crate::error::Result;
use crate::model::Theme;
use crate::store::KeyValueStore;

pub const THEME_KEY: &str = "theme";

pub fn get<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring stored theme: {:?}", raw);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            log::warn!("Could not read theme, using default: {}", e);
            Theme::default()
        }
    }
}

fn decode(raw: &str) -> Option<Theme> {
    [Theme::Light, Theme::Dark]
        .into_iter()
        .find(|theme| theme.as_str() == raw)
}

pub fn set<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
