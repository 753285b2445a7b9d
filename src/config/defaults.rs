// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Countdown**: Target instant and tick cadence
//! - **Gallery**: Row layout bounds
//! - **Snowfall**: Flake count bounds and animation cadence
//! - **Page**: Scroll-derived UI thresholds

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default countdown target (RFC 3339, wall-clock moment with UTC offset).
pub const DEFAULT_COUNTDOWN_TARGET: &str = "2034-02-10T00:00:00-07:00";

/// Default caption shown above the countdown cells.
pub const DEFAULT_COUNTDOWN_CAPTION: &str = "Counting down the days";

/// Line shown once the target instant has been reached.
pub const DEFAULT_ARRIVAL_MESSAGE: &str = "It's here!";

/// Cadence of the countdown refresh tick (in seconds).
pub const COUNTDOWN_TICK_SECS: u64 = 1;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default directory scanned for gallery images, relative to the working
/// directory.
pub const DEFAULT_GALLERY_DIR: &str = "gallery";

/// Default number of thumbnail rows the gallery splits into.
pub const DEFAULT_GALLERY_ROWS: usize = 3;

/// Minimum number of gallery rows.
pub const MIN_GALLERY_ROWS: usize = 1;

/// Maximum number of gallery rows.
pub const MAX_GALLERY_ROWS: usize = 5;

// ==========================================================================
// Snowfall Defaults
// ==========================================================================

/// Default number of snowflakes in the overlay.
pub const DEFAULT_FLAKE_COUNT: u32 = 60;

/// Minimum number of snowflakes.
pub const MIN_FLAKE_COUNT: u32 = 1;

/// Maximum number of snowflakes.
pub const MAX_FLAKE_COUNT: u32 = 240;

/// Cadence of the snowfall animation tick (in milliseconds).
pub const SNOW_TICK_MILLIS: u64 = 80;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Fraction of the page (relative scroll offset) after which the
/// back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f32 = 0.08;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gallery validation
    assert!(MIN_GALLERY_ROWS > 0);
    assert!(MAX_GALLERY_ROWS >= MIN_GALLERY_ROWS);
    assert!(DEFAULT_GALLERY_ROWS >= MIN_GALLERY_ROWS);
    assert!(DEFAULT_GALLERY_ROWS <= MAX_GALLERY_ROWS);

    // Snowfall validation
    assert!(MIN_FLAKE_COUNT > 0);
    assert!(MAX_FLAKE_COUNT >= MIN_FLAKE_COUNT);
    assert!(DEFAULT_FLAKE_COUNT >= MIN_FLAKE_COUNT);
    assert!(DEFAULT_FLAKE_COUNT <= MAX_FLAKE_COUNT);
    assert!(SNOW_TICK_MILLIS > 0);

    // Page validation
    assert!(BACK_TO_TOP_THRESHOLD > 0.0);
    assert!(BACK_TO_TOP_THRESHOLD < 1.0);

    // Countdown validation
    assert!(COUNTDOWN_TICK_SECS > 0);
};
