// SPDX-License-Identifier: MPL-2.0
//! `iced_scrapbook` is an animated keepsake page built with the Iced GUI
//! framework.
//!
//! It renders a scrolling narrative — hero, chapters, milestone timeline,
//! countdown, and photo gallery with a modal lightbox — from a TOML story
//! file and an image directory. The countdown arithmetic and the lightbox
//! state machine are plain library modules, usable without the UI.

#![doc(html_root_url = "https://docs.rs/iced_scrapbook/0.1.0")]

pub mod app;
pub mod config;
pub mod countdown;
pub mod error;
pub mod gallery_scanner;
pub mod lightbox;
pub mod story;
pub mod ui;
