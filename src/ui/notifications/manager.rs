// SPDX-License-Identifier: MPL-2.0
//! Queueing and dismissal of toasts.

use super::notification::{Notification, NotificationId};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick,
}

/// Visible toasts (newest first) plus an overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when the visible slots are full.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "notification"
        );
        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops expired toasts. Driven by the 100 ms tick while any are shown.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes every toast whose key starts with `prefix`.
    ///
    /// Used to drop stale load errors once a GIF loads successfully.
    pub fn clear_matching(&mut self, prefix: &str) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.message_key().starts_with(prefix));
        self.queue.retain(|n| !n.message_key().starts_with(prefix));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}
