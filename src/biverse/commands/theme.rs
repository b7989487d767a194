use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::preference;
use crate::store::KeyValueStore;

pub fn show<S: KeyValueStore + ?Sized>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_theme(preference::get(store)))
}

pub fn set<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_theme(theme);
    match preference::set(store, theme) {
        Ok(()) => result.add_message(CmdMessage::success(format!("Theme set to {}", theme))),
        Err(e) => {
            log::warn!("Theme not saved: {}", e);
            result.add_message(CmdMessage::warning(format!("Theme not saved: {}", e)));
        }
    }
    Ok(result)
}

pub fn toggle<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<CmdResult> {
    let next = preference::get(&*store).toggled();
    set(store, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn toggle_flips_persisted_theme() {
        let mut store = InMemoryStore::new();
        assert_eq!(toggle(&mut store).unwrap().theme, Some(Theme::Dark));
        assert_eq!(show(&store).unwrap().theme, Some(Theme::Dark));
        assert_eq!(toggle(&mut store).unwrap().theme, Some(Theme::Light));
    }

    #[test]
    fn failed_write_is_a_warning() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let result = set(&mut store, Theme::Dark).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(show(&store).unwrap().theme, Some(Theme::Light));
    }
}
