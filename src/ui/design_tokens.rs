// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the page: palette, opacity, spacing, typography, radii.
//!
//! Single source of truth for visual constants. The palette is built around a
//! midnight base with rose and frost accents; sections sit on translucent
//! light surfaces over the dark page.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.62);

    // Page base (deep midnight blue)
    pub const MIDNIGHT_900: Color = Color::from_rgb(0.043, 0.07, 0.125);
    pub const MIDNIGHT_700: Color = Color::from_rgb(0.09, 0.13, 0.21);

    // Brand colors (rose scale)
    pub const ROSE_200: Color = Color::from_rgb(0.98, 0.78, 0.87);
    pub const ROSE_300: Color = Color::from_rgb(0.97, 0.65, 0.78);
    pub const ROSE_400: Color = Color::from_rgb(0.96, 0.45, 0.65);
    pub const ROSE_500: Color = Color::from_rgb(0.93, 0.31, 0.55);

    // Accent (frost scale, used by the countdown digits)
    pub const FROST_200: Color = Color::from_rgb(0.65, 0.93, 0.96);
    pub const FROST_400: Color = Color::from_rgb(0.35, 0.78, 0.87);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const TEXT_MUTED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of a single countdown cell.
    pub const COUNTDOWN_CELL_WIDTH: f32 = 110.0;

    /// Gallery thumbnail dimensions.
    pub const THUMB_WIDTH: f32 = 220.0;
    pub const THUMB_HEIGHT: f32 = 130.0;

    /// Milestone photo dimensions.
    pub const MILESTONE_IMAGE_HEIGHT: f32 = 220.0;

    /// Maximum content width of the page column.
    pub const PAGE_MAX_WIDTH: f32 = 920.0;

    /// Height of the scroll progress bar.
    pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title.
    pub const TITLE_XL: f32 = 44.0;

    /// Section titles.
    pub const TITLE_LG: f32 = 30.0;

    /// Milestone titles, countdown digits.
    pub const TITLE_MD: f32 = 22.0;

    /// Subtitles, emphasis text.
    pub const BODY_LG: f32 = 17.0;

    /// Most prose.
    pub const BODY: f32 = 14.0;

    /// Eyebrows, unit labels, footer small print.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Sizing validation
    assert!(sizing::THUMB_WIDTH > sizing::THUMB_HEIGHT);
    assert!(sizing::PAGE_MAX_WIDTH > sizing::THUMB_WIDTH);
};
