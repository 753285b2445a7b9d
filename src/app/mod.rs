// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns the countdown, the lightbox, and the scanned
//! gallery, and translates messages into state transitions or side effects
//! like the startup gallery scan. Policy decisions (window sizing, which
//! subscriptions run when) stay close to the main loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ThemeChoice};
use crate::countdown::{self, TimeBreakdown};
use crate::error::Error;
use crate::gallery_scanner::GalleryList;
use crate::lightbox::Lightbox;
use crate::story::{self, Story};
use crate::ui::snowfall::Snowfall;
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use iced::{window, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Identifier of the page scrollable, used by back-to-top.
pub const PAGE_SCROLLABLE_ID: &str = "journey-page-scrollable";

/// Root Iced application state that bridges the page sections, the scanned
/// gallery, and the two logic cores.
pub struct App {
    config: Config,
    story: Story,
    /// Fixed countdown target, offset included.
    target: DateTime<FixedOffset>,
    /// Latest breakdown, refreshed once per second while the target is ahead.
    countdown: TimeBreakdown,
    /// Gallery images split into thumbnail strips.
    gallery_rows: Vec<Vec<PathBuf>>,
    gallery_dir: PathBuf,
    lightbox: Lightbox,
    snowfall: Snowfall,
    /// Relative vertical scroll offset of the page, 0..1.
    scroll_progress: f32,
    /// Year stamped into the footer at startup.
    footer_year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lightbox_open", &self.lightbox.is_open())
            .field("countdown_past", &self.countdown.is_past)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the asynchronous gallery
    /// scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref().map(Path::new))
            .unwrap_or_else(|err| {
                eprintln!("Failed to load config: {}", err);
                Config::default()
            });

        let story = load_story(&flags, &config);

        let gallery_dir = flags
            .gallery_dir
            .map(PathBuf::from)
            .or_else(|| config.gallery.directory.clone())
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_GALLERY_DIR));

        let target = config.parsed_target();
        let snowfall = Snowfall::new(config.flake_count());

        let app = App {
            countdown: countdown::remaining(Utc::now(), target),
            target,
            story,
            snowfall,
            gallery_rows: Vec::new(),
            gallery_dir: gallery_dir.clone(),
            lightbox: Lightbox::new(),
            scroll_progress: 0.0,
            footer_year: Utc::now().year(),
            config,
        };

        let scan = Task::perform(
            async move { GalleryList::scan_directory(&gallery_dir) },
            Message::GalleryScanCompleted,
        );

        (app, scan)
    }

    fn title(&self) -> String {
        if self.story.hero.title.is_empty() {
            "Scrapbook".to_string()
        } else {
            self.story.hero.title.clone()
        }
    }

    fn theme(&self) -> Theme {
        match self.config.theme() {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Resolves the story to present: CLI flag first, then the configured path,
/// then the built-in sample. Load failures fall back to the sample so the
/// window always opens.
fn load_story(flags: &Flags, config: &Config) -> Story {
    let path = flags
        .story_path
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.story_path.clone());

    match path {
        None => Story::default(),
        Some(path) => story::load_from_path(&path).unwrap_or_else(|err: Error| {
            eprintln!("Failed to load story {:?}: {}", path, err);
            Story::default()
        }),
    }
}
