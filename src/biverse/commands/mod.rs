use crate::config::BiverseConfig;
use crate::error::{BiverseError, Result};
use crate::favorites::FavoriteSet;
use crate::model::{Theme, Verse};
use std::path::PathBuf;

pub mod config;
pub mod daily;
pub mod emotions;
pub mod favorites;
pub mod find;
pub mod helpers;
pub mod random;
pub mod search;
pub mod theme;

#[derive(Debug, Clone)]
pub struct BiversePaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A verse as shown to the user: its 1-based position in the listing and whether it is
/// currently a favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayVerse {
    pub index: usize,
    pub verse: Verse,
    pub is_favorite: bool,
}

/// Number of loaded verses carrying an emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCount {
    pub emotion: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_verses: Vec<DisplayVerse>,
    pub emotions: Vec<EmotionCount>,
    pub theme: Option<Theme>,
    pub config: Option<BiverseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_verses(mut self, verses: Vec<DisplayVerse>) -> Self {
        self.listed_verses = verses;
        self
    }

    pub fn with_emotions(mut self, emotions: Vec<EmotionCount>) -> Self {
        self.emotions = emotions;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: BiverseConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Turns a recoverable query failure into an inline message. Anything else is
    /// returned as a real error.
    pub(crate) fn from_query_error(err: BiverseError) -> Result<Self> {
        match err {
            BiverseError::EmptyQuery
            | BiverseError::NoMatch(_)
            | BiverseError::EmptyCollection => {
                Ok(Self::default().with_message(CmdMessage::error(err.to_string())))
            }
            other => Err(other),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Number verses for display, marking those in `favorites`.
pub fn display_verses<I>(verses: I, favorites: &FavoriteSet) -> Vec<DisplayVerse>
where
    I: IntoIterator<Item = Verse>,
{
    verses
        .into_iter()
        .enumerate()
        .map(|(i, verse)| DisplayVerse {
            index: i + 1,
            is_favorite: favorites.contains(&verse),
            verse,
        })
        .collect()
}
