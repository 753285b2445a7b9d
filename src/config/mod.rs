// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; anything missing falls back to the
//! defaults in [`defaults`]. Invalid TOML degrades to a default config rather
//! than failing startup.

pub mod defaults;
pub use defaults::*;

use crate::countdown;
use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedScrapbook";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to the story file; relative paths resolve against the working
    /// directory. Kept ahead of the sections so it serializes as a
    /// top-level key.
    #[serde(default)]
    pub story_path: Option<PathBuf>,
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// RFC 3339 target instant, offset included (e.g. `2034-02-10T00:00:00-07:00`).
    pub target: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub directory: Option<PathBuf>,
    pub rows: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub snowfall: Option<bool>,
    pub flake_count: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    pub theme: Option<ThemeChoice>,
}

/// Window theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl Config {
    /// The countdown target, parsed. Falls back to the built-in default when
    /// unset or unparseable; a bad value is reported on stderr once.
    pub fn parsed_target(&self) -> DateTime<FixedOffset> {
        let fallback = || {
            countdown::parse_target(DEFAULT_COUNTDOWN_TARGET)
                .expect("default target is valid RFC 3339")
        };

        match &self.countdown.target {
            None => fallback(),
            Some(raw) => countdown::parse_target(raw).unwrap_or_else(|err| {
                eprintln!("Invalid countdown target {:?}: {}", raw, err);
                fallback()
            }),
        }
    }

    /// The countdown caption, defaulted.
    pub fn countdown_caption(&self) -> &str {
        self.countdown
            .caption
            .as_deref()
            .unwrap_or(DEFAULT_COUNTDOWN_CAPTION)
    }

    /// The gallery row count, clamped into the supported range.
    pub fn gallery_rows(&self) -> usize {
        self.gallery
            .rows
            .unwrap_or(DEFAULT_GALLERY_ROWS)
            .clamp(MIN_GALLERY_ROWS, MAX_GALLERY_ROWS)
    }

    /// Whether the snowfall overlay is enabled.
    pub fn snowfall_enabled(&self) -> bool {
        self.effects.snowfall.unwrap_or(true)
    }

    /// The snowflake count, clamped into the supported range.
    pub fn flake_count(&self) -> u32 {
        self.effects
            .flake_count
            .unwrap_or(DEFAULT_FLAKE_COUNT)
            .clamp(MIN_FLAKE_COUNT, MAX_FLAKE_COUNT)
    }

    /// The window theme preference.
    pub fn theme(&self) -> ThemeChoice {
        self.window.theme.unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the config from the platform config directory, or from
/// `override_dir/settings.toml` when an override is given.
pub fn load(override_dir: Option<&Path>) -> Result<Config> {
    let path = match override_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    };

    if let Some(path) = path {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the config to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
