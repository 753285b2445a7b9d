// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the page, overlays, and decorative layers.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::Color;

/// Solid base color behind everything on the page.
pub fn page_background() -> Color {
    palette::MIDNIGHT_900
}

/// Translucent surface color for section cards.
pub fn section_surface() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Hairline border color for section cards and thumbnails.
pub fn surface_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Primary text color on the dark page.
pub fn text_color() -> Color {
    WHITE
}

/// Secondary text color for subtitles and prose.
pub fn muted_text_color() -> Color {
    Color {
        a: opacity::TEXT_MUTED,
        ..WHITE
    }
}

/// Accent color for eyebrows, the progress bar, and highlights.
pub fn accent_color() -> Color {
    palette::ROSE_300
}

/// Color of the countdown digits.
pub fn countdown_digit_color() -> Color {
    palette::FROST_200
}

/// Backdrop color behind the open lightbox.
pub fn lightbox_backdrop() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Base color for snowflakes; per-flake tinting shifts it toward rose.
pub fn snowflake_color() -> Color {
    palette::ROSE_200
}

/// Year badge background in the milestone timeline.
pub fn badge_background() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}
