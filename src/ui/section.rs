// SPDX-License-Identifier: MPL-2.0
//! Section wrapper: a rounded translucent card with an optional header.
//!
//! Every block of the page (chapters, milestones, countdown, gallery,
//! gratitude) sits in one of these so the layout stays uniform.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::text::IntoFragment;
use iced::widget::{container, Column, Container, Text};
use iced::{Element, Length};

/// Header lines shown centered above the section content. Empty strings are
/// skipped entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header<'a> {
    pub eyebrow: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
}

/// Wraps `content` in a section card with the given header.
pub fn view<'a, Message: 'a>(
    header: Header<'a>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    if !header.eyebrow.is_empty() {
        let badge = Container::new(
            Text::new(header.eyebrow)
                .size(typography::CAPTION)
                .color(theme::accent_color()),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::badge);
        column = column.push(badge);
    }

    if !header.title.is_empty() {
        column = column.push(
            Text::new(header.title)
                .size(typography::TITLE_LG)
                .color(theme::text_color()),
        );
    }

    if !header.subtitle.is_empty() {
        column = column.push(
            Text::new(header.subtitle)
                .size(typography::BODY_LG)
                .color(theme::muted_text_color()),
        );
    }

    column = column.push(content);

    container(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::section_card)
        .into()
}

/// A plain prose paragraph in the page's body style, centered.
pub fn paragraph<'a, Message: 'a>(text: impl IntoFragment<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(text)
            .size(typography::BODY_LG)
            .color(theme::muted_text_color()),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::XXS, spacing::MD])
    .into()
}
