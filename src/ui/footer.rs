// SPDX-License-Identifier: MPL-2.0
//! Footer: attribution small print and external link labels.

use crate::story::Footer;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(footer: &'a Footer, year: i32) -> Element<'a, Message> {
    let attribution = if footer.attribution.is_empty() {
        format!("© {}", year)
    } else {
        format!("© {} • {}", year, footer.attribution)
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(attribution)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );

    if !footer.links.is_empty() {
        let mut links = Row::new().spacing(spacing::XL);
        for link in &footer.links {
            links = links.push(
                Column::new()
                    .align_x(Horizontal::Center)
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(&link.label)
                            .size(typography::BODY)
                            .color(theme::accent_color()),
                    )
                    .push(
                        Text::new(&link.url)
                            .size(typography::CAPTION)
                            .color(theme::muted_text_color()),
                    ),
            );
        }
        column = column.push(links);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::MD])
        .align_x(Horizontal::Center)
        .into()
}
