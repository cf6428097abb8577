// SPDX-License-Identifier: MPL-2.0
//! Banner notifications.
//!
//! - [`notification`] - `Notification` with severity and lifetime
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - widget rendering the visible banners

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
