// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: header with the dark-mode toggle, the add-clock panel,
//! and the grid of clock cards.
//!
//! The component only edits its own form state. Adding, removing and
//! toggling are reported to the application as [`Event`]s, since they
//! touch the dashboard state and the per-clock views the app owns.

use crate::clock::catalog::{self, TimezoneOption, POPULAR_TIMEZONES};
use crate::config::CLOCKS_PER_ROW;
use crate::dashboard::{ClockId, DashboardState};
use crate::i18n::fluent::I18n;
use crate::ui::clock::ClockView;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Inputs of the add-clock panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClockForm {
    pub selected: TimezoneOption,
    pub label: String,
}

impl Default for AddClockForm {
    fn default() -> Self {
        Self {
            selected: catalog::find("America/New_York")
                .copied()
                .unwrap_or(POPULAR_TIMEZONES[0]),
            label: String::new(),
        }
    }
}

impl AddClockForm {
    /// Empties the label after a successful add. The selected zone stays.
    pub fn clear_label(&mut self) {
        self.label.clear();
    }
}

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a DashboardState,
    pub clocks: &'a HashMap<ClockId, ClockView>,
    pub form: &'a AddClockForm,
}

#[derive(Debug, Clone)]
pub enum Message {
    TimezoneSelected(TimezoneOption),
    LabelChanged(String),
    AddClock,
    RemoveClock(ClockId),
    ToggleDarkMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    AddClock {
        timezone: String,
        label: Option<String>,
    },
    RemoveClock(ClockId),
    ToggleDarkMode,
}

/// Process a dashboard message and return the corresponding event.
pub fn update(message: Message, form: &mut AddClockForm) -> Event {
    match message {
        Message::TimezoneSelected(option) => {
            form.selected = option;
            Event::None
        }
        Message::LabelChanged(label) => {
            form.label = label;
            Event::None
        }
        Message::AddClock => Event::AddClock {
            timezone: form.selected.value.to_string(),
            label: Some(form.label.clone()).filter(|label| !label.trim().is_empty()),
        },
        Message::RemoveClock(id) => Event::RemoveClock(id),
        Message::ToggleDarkMode => Event::ToggleDarkMode,
    }
}

/// Render the dashboard.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(build_header(&ctx))
        .push(build_add_panel(&ctx))
        .push(build_grid(&ctx));

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-title")).size(typography::TITLE_LG);

    let toggle_key = if ctx.state.dark_mode() {
        "dashboard-toggle-light"
    } else {
        "dashboard-toggle-dark"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .on_press(Message::ToggleDarkMode)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::toggle);

    Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::MD)
        .push(Container::new(title).width(Length::Fill))
        .push(toggle)
        .into()
}

fn build_add_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("add-clock-title")).size(typography::TITLE_MD);

    let picker = pick_list(
        &POPULAR_TIMEZONES[..],
        Some(ctx.form.selected),
        Message::TimezoneSelected,
    )
    .placeholder(ctx.i18n.tr("add-clock-timezone-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let placeholder = ctx.i18n.tr("add-clock-label-placeholder");
    let label_input = text_input(&placeholder, &ctx.form.label)
        .on_input(Message::LabelChanged)
        .on_submit(Message::AddClock)
        .padding(spacing::XS)
        .width(Length::Fill);

    let add_button = button(Text::new(ctx.i18n.tr("add-clock-button")).size(typography::BODY))
        .on_press(Message::AddClock)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let field = |label_key: &str, input: Element<'a, Message>| -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(ctx.i18n.tr(label_key)).size(typography::CAPTION))
            .push(input)
            .into()
    };

    let inputs = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(field("add-clock-timezone-label", picker.into()))
        .push(field("add-clock-label-label", label_input.into()))
        .push(add_button);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(inputs),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = ctx
        .state
        .clocks()
        .iter()
        .filter_map(|config| ctx.clocks.get(&config.id))
        .map(|clock| build_card(ctx, clock))
        .collect();

    if cards.is_empty() {
        return build_empty_state(ctx);
    }

    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut cards = cards.into_iter().peekable();
    while cards.peek().is_some() {
        let row = Row::with_children(cards.by_ref().take(CLOCKS_PER_ROW)).spacing(spacing::LG);
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn build_card<'a>(ctx: &ViewContext<'a>, clock: &'a ClockView) -> Element<'a, Message> {
    let label = Text::new(clock.label()).size(typography::TITLE_SM);

    let remove = button(Text::new(ctx.i18n.tr("clock-remove-button")).size(typography::CAPTION))
        .on_press(Message::RemoveClock(clock.id()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(label).width(Length::Fill))
        .push(remove);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(clock.view()),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::CLOCK_CARD_WIDTH))
    .style(styles::container::card)
    .into()
}

fn build_empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ColorScheme::for_mode(ctx.state.dark_mode());
    let message = Text::new(ctx.i18n.tr("empty-state-title"))
        .size(typography::TITLE_SM)
        .color(scheme.text_secondary);

    Container::new(message)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
