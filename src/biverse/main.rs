use biverse::api::{
    BiverseApi, BiversePaths, CmdMessage, CmdResult, ConfigAction, DisplayVerse, EmotionCount,
    MessageLevel,
};
use biverse::collection::VerseCollection;
use biverse::commands;
use biverse::config::BiverseConfig;
use biverse::error::{BiverseError, Result};
use biverse::model::Theme;
use biverse::store::fs::FileStore;
use chrono::Datelike;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FavoriteCommands};

const HOME_ENV: &str = "BIVERSE_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BiversePaths {
        data_dir: data_dir()?,
    };

    // Config must stay reachable even when the configured data file is broken.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut api = init_api(&cli, paths)?;

    match cli.command {
        Some(Commands::Find { emotion }) => {
            let result = api.find_by_emotion(emotion.as_deref().unwrap_or(""))?;
            print_result(&result);
        }
        Some(Commands::Search { keyword, random }) => {
            let term = keyword.join(" ");
            if random {
                print_result(&api.search_random(&term)?);
            } else {
                let result = api.search(&term)?;
                print_verse_list(&result.listed_verses);
                print_messages(&result.messages);
            }
        }
        Some(Commands::Daily { day }) => print_result(&api.daily(day.unwrap_or_else(today))?),
        Some(Commands::Random) => print_result(&api.random()?),
        Some(Commands::Emotions) => {
            let result = api.emotions()?;
            print_emotions(&result.emotions);
            print_messages(&result.messages);
        }
        Some(Commands::Favorites { action }) => handle_favorites(&mut api, action)?,
        Some(Commands::Theme { value }) => handle_theme(&mut api, value)?,
        Some(Commands::Config { key, value }) => handle_config(api.paths(), key, value)?,
        None => print_result(&api.daily(today())?),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "biverse", "biverse")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BiverseError::Api("Could not determine data directory".to_string()))
}

fn init_api(cli: &Cli, paths: BiversePaths) -> Result<BiverseApi<FileStore>> {
    let config = BiverseConfig::load(&paths.data_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        BiverseConfig::default()
    });

    let collection = match cli.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => VerseCollection::load(path)?,
        None => VerseCollection::bundled()?,
    };
    if collection.skipped() > 0 {
        print_messages(&[CmdMessage::warning(format!(
            "Skipped {} malformed verse entries",
            collection.skipped()
        ))]);
    }

    let store = FileStore::new(paths.data_dir.clone());
    Ok(BiverseApi::new(collection, store, paths))
}

fn today() -> u32 {
    chrono::Local::now().day()
}

fn handle_favorites(
    api: &mut BiverseApi<FileStore>,
    action: Option<FavoriteCommands>,
) -> Result<()> {
    let result = match action {
        None | Some(FavoriteCommands::List) => {
            let result = api.favorites()?;
            print_verse_list(&result.listed_verses);
            print_messages(&result.messages);
            return Ok(());
        }
        Some(FavoriteCommands::Add { reference }) => {
            api.add_favorite_by_reference(&reference.join(" "))?
        }
        Some(FavoriteCommands::Remove { selector }) => {
            api.remove_favorite_by_selector(&selector.join(" "))?
        }
        Some(FavoriteCommands::Toggle { reference }) => {
            api.toggle_favorite_by_reference(&reference.join(" "))?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(api: &mut BiverseApi<FileStore>, value: Option<String>) -> Result<()> {
    let result = match value.as_deref().map(str::trim) {
        None => api.theme()?,
        Some("toggle") => api.toggle_theme()?,
        Some(other) => {
            let theme: Theme = other.parse().map_err(BiverseError::Api)?;
            api.set_theme(theme)?
        }
    };
    if let Some(theme) = result.theme {
        println!("theme = {}", theme);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &BiversePaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        for key in biverse::config::CONFIG_KEYS {
            if let Some(val) = config.get(key) {
                println!("{} = {}", key, val);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const FAVORITE_MARKER: &str = "★";

fn print_result(result: &CmdResult) {
    for dv in &result.listed_verses {
        print_verse(dv);
    }
    print_messages(&result.messages);
}

fn print_verse(dv: &DisplayVerse) {
    let marker = if dv.is_favorite {
        format!(" {}", FAVORITE_MARKER.yellow())
    } else {
        String::new()
    };
    println!("{}{}", dv.verse.reference.bold(), marker);
    println!("{}", dv.verse.text);
}

fn print_verse_list(verses: &[DisplayVerse]) {
    for dv in verses {
        let idx_str = format!("{:>3}. ", dv.index);
        let marker = if dv.is_favorite { FAVORITE_MARKER } else { " " };
        let prefix = format!("{} {}", marker, idx_str);

        let reference = &dv.verse.reference;
        let available = LINE_WIDTH
            .saturating_sub(prefix.width())
            .saturating_sub(reference.width() + 2);
        let preview = truncate_to_width(&dv.verse.text.replace('\n', " "), available);

        println!(
            "{}{}{}  {}",
            marker.yellow(),
            format!(" {}", idx_str).dimmed(),
            reference.bold(),
            preview
        );
    }
}

fn print_emotions(emotions: &[EmotionCount]) {
    let label_width = emotions.iter().map(|e| e.label.width()).max().unwrap_or(0);
    for entry in emotions {
        let padding = " ".repeat(label_width.saturating_sub(entry.label.width()));
        let count = format!("{} verses", entry.count);
        if entry.count == 0 {
            println!("  {}{}  {}", entry.label.dimmed(), padding, count.dimmed());
        } else {
            println!("  {}{}  {}", entry.label, padding, count.dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
