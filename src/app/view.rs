// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column of sections; decorative and modal
//! layers (snowfall, scroll progress, back-to-top, lightbox) stack above it.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::config::BACK_TO_TOP_THRESHOLD;
use crate::config::DEFAULT_ARRIVAL_MESSAGE;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{
    countdown_panel, footer, gallery_strip, hero, lightbox_overlay, section, styles, theme,
    timeline,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{Background, Element, Length, Theme};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let mut stack = Stack::new().push(self.view_page());

        if self.config.snowfall_enabled() {
            stack = stack.push(self.snowfall.view());
        }

        stack = stack.push(progress_bar(self.scroll_progress));

        if self.scroll_progress > BACK_TO_TOP_THRESHOLD {
            stack = stack.push(back_to_top_layer());
        }

        if self.lightbox.is_open() {
            stack = stack.push(lightbox_overlay::view(&self.lightbox));
        }

        let background = theme::page_background();
        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            })
            .into()
    }

    fn view_page(&self) -> Element<'_, Message> {
        let mut sections = Column::new()
            .spacing(spacing::XXL)
            .width(Length::Fill)
            .push(hero::view(&self.story.hero));

        for chapter in &self.story.chapters {
            sections = sections.push(section::view(
                section::Header {
                    eyebrow: &chapter.eyebrow,
                    title: &chapter.title,
                    subtitle: &chapter.subtitle,
                },
                section::paragraph(&chapter.body),
            ));
        }

        if !self.story.milestones.is_empty() {
            sections = sections.push(section::view(
                section::Header {
                    title: "Milestones",
                    subtitle: "Moments worth keeping",
                    ..Default::default()
                },
                timeline::view(&self.story.milestones),
            ));
        }

        sections = sections.push(section::view(
            section::Header {
                eyebrow: "The Big Goal",
                title: "Countdown",
                subtitle: self.config.countdown_caption(),
            },
            countdown_panel::view(&self.countdown, DEFAULT_ARRIVAL_MESSAGE),
        ));

        sections = sections.push(section::view(
            section::Header {
                title: "Gallery",
                subtitle: "Favorite moments",
                ..Default::default()
            },
            gallery_strip::view(&self.gallery_rows),
        ));

        if !self.story.gratitude.is_empty() {
            let mut quotes = Column::new().spacing(spacing::MD).width(Length::Fill);
            for quote in &self.story.gratitude {
                quotes = quotes.push(section::paragraph(format!("\u{201C}{}\u{201D}", quote)));
            }
            sections = sections.push(section::view(
                section::Header {
                    title: "Gratitude",
                    ..Default::default()
                },
                quotes.into(),
            ));
        }

        sections = sections.push(footer::view(&self.story.footer, self.footer_year));

        let content = Container::new(sections)
            .max_width(sizing::PAGE_MAX_WIDTH)
            .padding(spacing::LG);

        let centered = Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        Scrollable::new(centered)
            .id(Id::new(PAGE_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.relative_offset().y))
            .into()
    }
}

/// Thin bar across the top of the window showing scroll progress.
fn progress_bar<'a>(progress: f32) -> Element<'a, Message> {
    let filled = (progress.clamp(0.0, 1.0) * 1000.0) as u16;

    let bar: Element<'a, Message> = if filled == 0 {
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
            .into()
    } else {
        let mut row = Row::new().width(Length::Fill).push(
            Container::new(
                Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
            )
            .width(Length::FillPortion(filled))
            .style(styles::progress_fill),
        );
        if filled < 1000 {
            row = row.push(
                Space::new()
                    .width(Length::FillPortion(1000 - filled))
                    .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
            );
        }
        row.into()
    };

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Top)
        .into()
}

/// Floating back-to-top button in the bottom-right corner.
fn back_to_top_layer<'a>() -> Element<'a, Message> {
    let pill = button(Text::new("Back to top").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::back_to_top)
        .on_press(Message::BackToTop);

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
