// SPDX-License-Identifier: MPL-2.0
//! Gallery thumbnail rows.
//!
//! The scanned image list is split into horizontal strips; clicking a
//! thumbnail opens the lightbox over that strip's images at the clicked
//! position, so navigation stays within the row the user started from.

use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

pub fn view(rows: &[Vec<PathBuf>]) -> Element<'_, Message> {
    if rows.is_empty() {
        return Container::new(
            Text::new("Add images to the gallery directory to populate this section.")
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into();
    }

    let mut column = Column::new().spacing(spacing::SM).width(Length::Fill);
    for row in rows {
        column = column.push(strip(row));
    }

    column.into()
}

fn strip(row: &[PathBuf]) -> Element<'_, Message> {
    let mut thumbnails = Row::new().spacing(spacing::SM);

    for (i, path) in row.iter().enumerate() {
        let thumbnail = Image::new(Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::THUMB_WIDTH))
            .height(Length::Fixed(sizing::THUMB_HEIGHT));

        thumbnails = thumbnails.push(
            button(thumbnail)
                .padding(spacing::XXS)
                .style(styles::thumbnail_button)
                .on_press(Message::OpenLightbox {
                    items: row.to_vec(),
                    index: i,
                }),
        );
    }

    Scrollable::new(thumbnails)
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}
