// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Messages arrive in order and are handled one at a time; the lightbox and
//! the countdown have exactly one owner, so no transition ever races another.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::countdown;
use chrono::Utc;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                self.countdown = countdown::remaining(Utc::now(), self.target);
                Task::none()
            }
            Message::SnowTick(_) => {
                self.snowfall.tick();
                Task::none()
            }
            Message::GalleryScanCompleted(result) => {
                match result {
                    Ok(list) => {
                        self.gallery_rows = list.rows(self.config.gallery_rows());
                    }
                    Err(err) => {
                        eprintln!(
                            "Failed to scan gallery directory {:?}: {}",
                            self.gallery_dir, err
                        );
                        self.gallery_rows.clear();
                    }
                }
                Task::none()
            }
            Message::OpenLightbox { items, index } => {
                self.lightbox.open(items, index);
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox.close();
                Task::none()
            }
            Message::ShowNext => {
                self.lightbox.next();
                Task::none()
            }
            Message::ShowPrevious => {
                self.lightbox.previous();
                Task::none()
            }
            Message::PageScrolled(offset) => {
                self.scroll_progress = offset.clamp(0.0, 1.0);
                Task::none()
            }
            Message::BackToTop => {
                self.scroll_progress = 0.0;
                operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
            }
        }
    }
}
