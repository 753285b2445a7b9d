// SPDX-License-Identifier: MPL-2.0
//! User interface components for the page.
//!
//! Section views follow the Elm-style "state down, messages up" pattern:
//! they receive borrowed state and produce elements, emitting top-level
//! messages only where the user can act (gallery thumbnails, lightbox
//! controls, back-to-top).
//!
//! # Sections
//!
//! - [`hero`] - Page title and scroll hint
//! - [`section`] - Shared card wrapper with eyebrow/title/subtitle header
//! - [`timeline`] - Milestone entries with photos
//! - [`countdown_panel`] - Countdown cells / arrival line
//! - [`gallery_strip`] - Thumbnail rows that open the lightbox
//! - [`lightbox_overlay`] - Modal image viewer with navigation controls
//! - [`footer`] - Attribution and link labels
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Color helpers
//! - [`styles`] - Centralized container and button styles
//! - [`snowfall`] - Decorative Canvas overlay

pub mod countdown_panel;
pub mod design_tokens;
pub mod footer;
pub mod gallery_strip;
pub mod hero;
pub mod lightbox_overlay;
pub mod section;
pub mod snowfall;
pub mod styles;
pub mod theme;
pub mod timeline;
