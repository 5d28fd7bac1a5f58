#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use lovenote_core::{CardContent, Timings};

/// Card settings, set once from the command line before launch
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Everything the app needs to build its card machine.
#[derive(Debug, Clone)]
pub struct Settings {
    pub content: CardContent,
    pub timings: Timings,
    pub confetti: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content: CardContent::default(),
            timings: Timings::default(),
            confetti: true,
        }
    }
}

/// Get the card settings (set from command line or default)
pub fn get_settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

/// Lovenote - an interactive greeting card
#[derive(Parser, Debug)]
#[command(name = "lovenote-desktop")]
#[command(about = "Lovenote - an animated greeting card in a desktop window")]
struct Args {
    /// Card content file (JSON). Defaults to <config dir>/lovenote/card.json
    /// when that file exists, otherwise the built-in card
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Animation speed factor; 0.5 plays everything twice as fast (max 100)
    #[arg(short, long, default_value_t = 1.0)]
    speed: f64,

    /// Skip the confetti burst when the letter opens
    #[arg(long)]
    no_confetti: bool,

    /// Print the page head markup and exit
    #[arg(long)]
    print_head: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 960.0)]
    height: f64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Explicit path first, then the per-user card if one is present.
fn resolve_content_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("lovenote").join("card.json"))
            .filter(|path| path.is_file())
    })
}

fn load_content(path: Option<PathBuf>) -> anyhow::Result<CardContent> {
    match path {
        Some(path) => {
            tracing::info!("Loading card content from {:?}", path);
            CardContent::load(&path)
                .with_context(|| format!("failed to load card content from {}", path.display()))
        }
        None => {
            tracing::info!("Using built-in card content");
            Ok(CardContent::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    lovenote_core::logging::init(args.verbose);

    let content = load_content(resolve_content_path(args.content))?;

    if args.print_head {
        println!("{}", content.meta.to_html());
        return Ok(());
    }

    let timings = Timings::default()
        .scaled(args.speed)
        .context("invalid --speed")?;

    let title = content.meta.title.clone();
    let settings = Settings {
        content,
        timings,
        confetti: !args.no_confetti,
    };
    let _ = SETTINGS.set(settings);

    tracing::info!(
        "Starting '{}' (speed x{}, confetti {})",
        title,
        args.speed,
        !args.no_confetti
    );

    // Configure desktop window
    let config = Config::new()
        .with_background_color(theme::CREAM_RGBA)
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_content_path_wins() {
        let path = PathBuf::from("/tmp/some-card.json");
        assert_eq!(resolve_content_path(Some(path.clone())), Some(path));
    }

    #[test]
    fn missing_content_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(Some(dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load card content"));
    }

    #[test]
    fn no_path_means_builtin_card() {
        let content = load_content(None).unwrap();
        assert_eq!(content.hero.greeting, CardContent::default().hero.greeting);
    }

    #[test]
    fn args_parse_speed_and_flags() {
        let args = Args::parse_from(["lovenote-desktop", "--speed", "0.5", "--no-confetti"]);
        assert_eq!(args.speed, 0.5);
        assert!(args.no_confetti);
        assert!(!args.print_head);
        assert!(args.content.is_none());
    }
}
