// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File drops are always forwarded. Keyboard events only become shortcuts when
//! no widget captured them, so a focused URL field keeps its own keys.

use super::Message;
use crate::ui::shortcuts;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => {
                shortcuts::from_event(&keyboard_event).map(Message::Shortcut)
            }
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks only while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
