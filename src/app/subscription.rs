// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every recurring resource here is scoped to the state that needs it: the
//! countdown tick stops once the target has passed, the snow tick only runs
//! while the overlay is enabled, and the keyboard listener exists only while
//! the lightbox is open. Dropping out of the subscription set is the
//! guaranteed release.

use super::{App, Message};
use crate::config::{COUNTDOWN_TICK_SECS, SNOW_TICK_MILLIS};
use iced::keyboard::{self, key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

impl App {
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            create_countdown_subscription(!self.countdown.is_past),
            create_snow_subscription(self.config.snowfall_enabled()),
            create_lightbox_key_subscription(self.lightbox.is_open()),
        ])
    }
}

/// Creates the 1 Hz countdown refresh tick.
///
/// Once the target has passed the breakdown is terminal, so the tick source
/// is released instead of firing forever.
pub fn create_countdown_subscription(counting: bool) -> Subscription<Message> {
    if counting {
        time::every(Duration::from_secs(COUNTDOWN_TICK_SECS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the snowfall animation tick.
pub fn create_snow_subscription(enabled: bool) -> Subscription<Message> {
    if enabled {
        time::every(Duration::from_millis(SNOW_TICK_MILLIS)).map(Message::SnowTick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard listener for the open lightbox.
///
/// Escape closes, ArrowLeft/ArrowRight navigate. While the lightbox is
/// closed no listener is registered at all, so stray key presses cannot
/// reach the navigation logic.
pub fn create_lightbox_key_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match (event, status) {
        (
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseLightbox),
            keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::ShowPrevious),
            keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::ShowNext),
            _ => None,
        },
        _ => None,
    })
}
