// SPDX-License-Identifier: MPL-2.0
//! Hero section: the page title, its supporting lines, and a scroll hint.

use crate::story::Hero;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(hero: &'a Hero) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(&hero.title)
                .size(typography::TITLE_XL)
                .color(theme::text_color()),
        );

    if !hero.subtitle.is_empty() {
        column = column.push(
            Text::new(&hero.subtitle)
                .size(typography::TITLE_MD)
                .color(theme::muted_text_color()),
        );
    }

    if !hero.tagline.is_empty() {
        column = column.push(
            Text::new(&hero.tagline)
                .size(typography::BODY_LG)
                .color(theme::muted_text_color()),
        );
    }

    column = column.push(
        Text::new("⌄ Scroll")
            .size(typography::CAPTION)
            .color(theme::accent_color()),
    );

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .into()
}
