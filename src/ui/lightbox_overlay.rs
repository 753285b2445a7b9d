// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox overlay: backdrop, full image, and navigation controls.
//!
//! Clicking the backdrop closes the overlay; the arrow buttons mirror the
//! ArrowLeft/ArrowRight key bindings handled by the app subscription.

use crate::app::Message;
use crate::lightbox::Lightbox;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Container, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Renders the open lightbox as a stack layer. Call only while open; a
/// closed lightbox renders nothing.
pub fn view(lightbox: &Lightbox) -> Element<'_, Message> {
    let (Some(current), Some((index, total))) = (lightbox.current(), lightbox.position()) else {
        return Space::new()
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let backdrop: Element<'_, Message> = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::lightbox_backdrop),
    )
    .on_press(Message::CloseLightbox)
    .into();

    let image_layer = Container::new(
        Image::new(Handle::from_path(current))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XXL);

    let mut stack = Stack::new().push(backdrop).push(image_layer);

    let close = button(Text::new("Close").size(typography::BODY))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            theme::text_color(),
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::CloseLightbox);
    stack = stack.push(
        Container::new(close)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    if total > 1 {
        let previous = button(Text::new("‹").size(typography::TITLE_LG))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_overlay(
                theme::text_color(),
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
            .on_press(Message::ShowPrevious);
        stack = stack.push(
            Container::new(previous)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        );

        let next = button(Text::new("›").size(typography::TITLE_LG))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button_overlay(
                theme::text_color(),
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
            .on_press(Message::ShowNext);
        stack = stack.push(
            Container::new(next)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    let counter = Container::new(
        Text::new(format!("{} / {}", index + 1, total))
            .size(typography::CAPTION)
            .color(theme::text_color()),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::media_frame);
    stack = stack.push(
        Container::new(counter)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
    );

    stack.into()
}
