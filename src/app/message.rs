// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery_scanner::GalleryList;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Everything the page can do
/// flows through this single entrypoint, in arrival order.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic countdown refresh (1 Hz while the target is ahead).
    Tick(Instant),
    /// Snowfall animation step.
    SnowTick(Instant),
    /// Result from the async gallery directory scan.
    GalleryScanCompleted(Result<GalleryList, Error>),
    /// A gallery thumbnail was clicked: open the lightbox over that strip.
    OpenLightbox { items: Vec<PathBuf>, index: usize },
    /// Close the lightbox (Escape, close button, or backdrop click).
    CloseLightbox,
    /// Advance the lightbox to the next image (ArrowRight or button).
    ShowNext,
    /// Step the lightbox back to the previous image (ArrowLeft or button).
    ShowPrevious,
    /// The page scrollable moved; relative vertical offset in 0..1.
    PageScrolled(f32),
    /// Snap the page back to the top.
    BackToTop,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional story file path to present.
    pub story_path: Option<String>,
    /// Optional gallery directory override.
    pub gallery_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
