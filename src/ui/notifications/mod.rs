// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Success and info toasts disappear after 3 s, warnings after 5 s, and
//! errors stay until dismissed. At most three are visible; the rest wait in a
//! queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-export-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
