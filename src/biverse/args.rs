use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biverse", version)]
#[command(about = "Find a Bible verse for the way you feel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verses JSON file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a random verse for an emotion
    #[command(alias = "f")]
    Find {
        /// Emotion to look for (see `biverse emotions`)
        emotion: Option<String>,
    },

    /// Search verse text and references
    #[command(alias = "s")]
    Search {
        /// Word or phrase to look for
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,

        /// Show one random match instead of all of them
        #[arg(short, long)]
        random: bool,
    },

    /// Show the verse of the day
    #[command(alias = "d")]
    Daily {
        /// Day of the month to use instead of today
        #[arg(long)]
        day: Option<u32>,
    },

    /// Show a random verse from the whole collection
    #[command(alias = "r")]
    Random,

    /// List the emotions you can pick from
    #[command(alias = "e")]
    Emotions,

    /// Manage favorite verses
    #[command(alias = "fav")]
    Favorites {
        #[command(subcommand)]
        action: Option<FavoriteCommands>,
    },

    /// Show or change the display theme
    Theme {
        /// light, dark or toggle
        value: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoriteCommands {
    /// List favorites
    #[command(alias = "ls")]
    List,

    /// Add a verse by reference (e.g. "Isaiah 40:31")
    Add {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Remove a favorite by list index or reference
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// Add the verse if it is not a favorite, remove it otherwise
    Toggle {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
}
