// SPDX-License-Identifier: MPL-2.0
//! Milestone timeline: dated achievements with their photos.
//!
//! Rows alternate text/media sides, echoing a zigzag timeline. Videos are
//! shown as captioned chips; playback is out of scope.

use crate::story::Milestone;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(milestones: &'a [Milestone]) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXL).width(Length::Fill);

    for (i, milestone) in milestones.iter().enumerate() {
        column = column.push(entry(milestone, i % 2 == 1));
    }

    column.into()
}

fn entry<'a, Message: 'a>(milestone: &'a Milestone, flipped: bool) -> Element<'a, Message> {
    let text_side = text_side(milestone);
    let media_side = media_side(milestone);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    if flipped {
        row = row.push(media_side).push(text_side);
    } else {
        row = row.push(text_side).push(media_side);
    }

    row.into()
}

fn text_side<'a, Message: 'a>(milestone: &'a Milestone) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(&milestone.year)
            .size(typography::CAPTION)
            .color(theme::muted_text_color()),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::badge);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(badge)
        .push(
            Text::new(&milestone.title)
                .size(typography::TITLE_MD)
                .color(theme::text_color()),
        );

    if !milestone.copy.is_empty() {
        column = column.push(
            Text::new(&milestone.copy)
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        );
    }

    column.into()
}

fn media_side<'a, Message: 'a>(milestone: &'a Milestone) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1));

    for image in &milestone.images {
        column = column.push(
            Container::new(
                Image::new(Handle::from_path(image))
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::MILESTONE_IMAGE_HEIGHT)),
            )
            .style(styles::media_frame),
        );
    }

    for video in &milestone.videos {
        let name = video
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video");
        column = column.push(
            Container::new(
                Text::new(format!("▶ {}", name))
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::badge),
        );
    }

    column.into()
}
