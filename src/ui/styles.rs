// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles: section cards, overlay buttons, badges.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius, shadow};
use crate::ui::theme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Style for the rounded translucent card every section sits in.
pub fn section_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::section_surface())),
        text_color: Some(theme::text_color()),
        border: Border {
            color: theme::surface_border(),
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Style for small pill badges (eyebrows, milestone years).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::badge_background())),
        text_color: Some(theme::muted_text_color()),
        border: Border {
            color: theme::surface_border(),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Style for a single countdown cell.
pub fn countdown_cell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::section_surface())),
        text_color: Some(theme::text_color()),
        border: Border {
            color: theme::surface_border(),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Style for framed media (milestone photos, lightbox counter).
pub fn media_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::section_surface())),
        text_color: Some(theme::text_color()),
        border: Border {
            color: theme::surface_border(),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Style for the dark backdrop layer behind the open lightbox.
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::lightbox_backdrop())),
        ..Default::default()
    }
}

/// Style for overlay buttons (lightbox close and navigation arrows).
pub fn button_overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: theme::surface_border(),
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for borderless thumbnail buttons in the gallery strip.
pub fn thumbnail_button(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => theme::accent_color(),
        _ => theme::surface_border(),
    };

    button::Style {
        background: None,
        text_color: theme::text_color(),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the back-to-top pill button.
pub fn back_to_top(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => theme::accent_color(),
        _ => Color {
            a: 0.9,
            ..iced::Color::WHITE
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: theme::surface_border(),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Style for the filled part of the scroll progress bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::accent_color())),
        ..Default::default()
    }
}
