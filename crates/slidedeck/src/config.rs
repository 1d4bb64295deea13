use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use pager::{EffectsConfig, KeyMap, NavigationConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Heading(String);

crate::impl_string_newtype!(Heading);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Paragraph(String);

crate::impl_string_newtype!(Paragraph);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CardConfig {
    pub title: Heading,
    #[serde(default)]
    pub text: Option<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SlideConfig {
    pub title: Heading,
    #[serde(default)]
    pub body: Option<Paragraph>,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub keys: KeyMap,
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

impl Config {
    pub fn card_count(&self) -> usize {
        self.slides.iter().map(|s| s.cards.len()).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }
        if self.navigation.start_page >= self.slides.len() {
            return Err(ConfigError::StartPage {
                start: self.navigation.start_page,
                slides: self.slides.len(),
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("The deck has no slides")]
    NoSlides,
    #[error("Start page {start} is past the last slide ({slides} slides)")]
    StartPage { start: usize, slides: usize },
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "slidedeck").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    explicit.map_or_else(get_config_path, Ok)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("SLIDEDECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The deck shipped in `default_config.toml`.
pub fn builtin() -> Config {
    config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(|c| c.try_deserialize())
        .unwrap_or_else(|e| {
            log::error!("Built-in deck is invalid: {}", e);
            Config {
                slides: vec![SlideConfig {
                    title: Heading::new("slidedeck"),
                    body: Some(Paragraph::new("Run `slidedeck --init` to create a deck.")),
                    cards: Vec::new(),
                }],
                ..Config::default()
            }
        })
}

/// Loads the deck at `path`, falling back to the built-in deck when the file
/// is missing, unreadable or has no slides.
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        log::info!("No deck at {}, showing the built-in deck", path.display());
        return builtin();
    }

    match load_config(path) {
        Ok(c) if !c.slides.is_empty() => c,
        Ok(c) => {
            log::warn!("{} has no slides, showing the built-in deck", path.display());
            Config {
                slides: builtin().slides,
                ..c
            }
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            builtin()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pager::NavKey;
    use std::time::Duration;

    #[test]
    fn builtin_deck_is_valid() {
        let cfg = builtin();
        assert!(cfg.validate().is_ok());
        assert!(cfg.slides.len() > 1);
        assert!(cfg.card_count() > 0);
        assert_eq!(cfg.navigation, NavigationConfig::default());
    }

    #[test]
    fn test_deck_deserialization() {
        let json = r#"{
            "navigation": { "transition_ms": 600, "start_page": 1 },
            "keys": { "next": ["space", "pgdn"] },
            "slides": [
                { "title": "Intro" },
                { "title": "Vision", "body": "Why", "cards": [{ "title": "One", "text": "a" }] }
            ]
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.navigation.transition, Duration::from_millis(600));
        assert_eq!(cfg.navigation.wheel_debounce, Duration::from_millis(100));
        assert_eq!(cfg.keys.next, vec![NavKey::Space, NavKey::PageDown]);
        assert_eq!(cfg.keys.prev, KeyMap::default().prev);
        assert_eq!(cfg.slides[1].cards[0].title, Heading::from("One"));
        assert_eq!(cfg.card_count(), 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_out_of_range() {
        assert!(matches!(Config::default().validate(), Err(ConfigError::NoSlides)));

        let mut cfg = builtin();
        cfg.navigation.start_page = cfg.slides.len();
        assert!(matches!(cfg.validate(), Err(ConfigError::StartPage { .. })));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let cfg = load_or_default(Path::new("/nonexistent/slidedeck/config.toml"));
        assert_eq!(cfg.slides, builtin().slides);
    }
}
