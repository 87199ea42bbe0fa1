// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::Message;
use crate::clock::time_source::tick_subscription;
use crate::config::NOTIFICATION_POLL_MS;
use crate::dashboard::ClockId;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// One timer per live clock.
///
/// iced keys each timer by its clock id, so a clock that disappears from
/// `ids` has its timer dropped on the next update cycle.
pub fn create_clock_subscriptions(ids: impl IntoIterator<Item = ClockId>) -> Subscription<Message> {
    Subscription::batch(ids.into_iter().map(|id| {
        tick_subscription(id).map(|(id, fired_at)| Message::ClockTick { id, fired_at })
    }))
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_POLL_MS))
            .map(|at| Message::Notification(NotificationMessage::Tick(at)))
    } else {
        Subscription::none()
    }
}
