// SPDX-License-Identifier: MPL-2.0
//! Countdown display: one cell per unit, or the arrival line once past.

use crate::countdown::TimeBreakdown;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(
    breakdown: &TimeBreakdown,
    arrival_message: &'a str,
) -> Element<'a, Message> {
    if breakdown.is_past {
        return Container::new(
            Text::new(arrival_message)
                .size(typography::TITLE_MD)
                .color(theme::countdown_digit_color()),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into();
    }

    let cells = [
        (breakdown.years, "Years"),
        (breakdown.days, "Days"),
        (breakdown.hours, "Hours"),
        (breakdown.minutes, "Minutes"),
        (breakdown.seconds, "Seconds"),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (value, label) in cells {
        row = row.push(cell(value, label));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn cell<'a, Message: 'a>(value: u64, label: &'a str) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(value.to_string())
                .size(typography::TITLE_MD)
                .color(theme::countdown_digit_color()),
        )
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );

    Container::new(column)
        .width(Length::Fixed(sizing::COUNTDOWN_CELL_WIDTH))
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .style(styles::countdown_cell)
        .into()
}
