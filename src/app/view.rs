// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::dashboard::{ClockId, DashboardState};
use crate::i18n::fluent::I18n;
use crate::ui::clock::ClockView;
use crate::ui::dashboard::{self, AddClockForm};
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dashboard: &'a DashboardState,
    pub clocks: &'a HashMap<ClockId, ClockView>,
    pub form: &'a AddClockForm,
    pub notifications: &'a notifications::Manager,
}

/// Renders the dashboard with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = dashboard::view(dashboard::ViewContext {
        i18n: ctx.i18n,
        state: ctx.dashboard,
        clocks: ctx.clocks,
        form: ctx.form,
    })
    .map(Message::Dashboard);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
