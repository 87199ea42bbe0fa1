// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers borrow the pieces of `App` they need through [`UpdateContext`],
//! so each one can be read without the whole struct in view.

use super::Message;
use crate::clock::time_source::is_overrun;
use crate::clock::TimeSource;
use crate::dashboard::{ClockId, DashboardState};
use crate::ui::clock::ClockView;
use crate::ui::dashboard::{self, AddClockForm, Event as DashboardEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::collections::HashMap;
use std::time::Instant;

pub struct UpdateContext<'a> {
    pub dashboard: &'a mut DashboardState,
    pub clocks: &'a mut HashMap<ClockId, ClockView>,
    pub form: &'a mut AddClockForm,
    pub notifications: &'a mut notifications::Manager,
    pub time_source: &'a dyn TimeSource,
}

/// Tick sent as soon as a clock view exists, ahead of its first timer tick.
pub fn attach_tick(id: ClockId) -> Task<Message> {
    Task::done(Message::ClockTick {
        id,
        fired_at: Instant::now(),
    })
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message, ctx.form) {
        DashboardEvent::None => Task::none(),
        DashboardEvent::AddClock { timezone, label } => {
            handle_add_clock(ctx, &timezone, label.as_deref())
        }
        DashboardEvent::RemoveClock(id) => {
            handle_remove_clock(ctx, id);
            Task::none()
        }
        DashboardEvent::ToggleDarkMode => {
            handle_toggle_dark_mode(ctx);
            Task::none()
        }
    }
}

pub fn handle_add_clock(
    ctx: &mut UpdateContext<'_>,
    timezone: &str,
    label: Option<&str>,
) -> Task<Message> {
    let id = match ctx.dashboard.add(timezone, label) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(timezone, error = %err, "rejected clock");
            ctx.notifications.push(Notification::from_error(&err));
            return Task::none();
        }
    };

    let Some(config) = ctx.dashboard.get(id) else {
        return Task::none();
    };
    tracing::info!(clock = %id, timezone = config.timezone(), label = %config.label, "clock added");
    ctx.clocks
        .insert(id, ClockView::new(config, ctx.dashboard.dark_mode()));
    ctx.form.clear_label();

    attach_tick(id)
}

pub fn handle_remove_clock(ctx: &mut UpdateContext<'_>, id: ClockId) {
    // Dropping the view also drops its timer from the next subscription set
    ctx.clocks.remove(&id);
    if let Some(removed) = ctx.dashboard.remove(id) {
        tracing::info!(clock = %id, timezone = removed.timezone(), "clock removed");
    }
}

pub fn handle_toggle_dark_mode(ctx: &mut UpdateContext<'_>) {
    let dark_mode = ctx.dashboard.toggle_dark_mode();
    for clock in ctx.clocks.values_mut() {
        clock.set_dark_mode(dark_mode);
    }
    tracing::debug!(dark_mode, "theme toggled");
}

pub fn handle_clock_tick(ctx: &mut UpdateContext<'_>, id: ClockId, fired_at: Instant) {
    let Some(clock) = ctx.clocks.get_mut(&id) else {
        tracing::trace!(clock = %id, "tick for removed clock ignored");
        return;
    };

    let handled_at = Instant::now();
    if is_overrun(fired_at, handled_at) {
        let late = handled_at.saturating_duration_since(fired_at);
        tracing::debug!(clock = %id, late = ?late, "clock tick ran late");
    }

    clock.tick(ctx.time_source.now());
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) {
    ctx.notifications.handle_message(message);
}
