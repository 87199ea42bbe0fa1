// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the dashboard state, one `ClockView` per
//! clock, localization and notifications. Startup policy (which settings
//! win, how dark mode is detected, which seeds are rejected) lives here so
//! it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::clock::{SystemTimeSource, TimeSource};
use crate::config::{self, Config};
use crate::dashboard::{ClockId, DashboardState};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::clock::ClockView;
use crate::ui::dashboard::AddClockForm;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    dashboard: DashboardState,
    /// Live views keyed by clock id. Kept in sync with `dashboard`.
    clocks: HashMap<ClockId, ClockView>,
    form: AddClockForm,
    notifications: notifications::Manager,
    time_source: Box<dyn TimeSource>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("clock_count", &self.dashboard.clocks().len())
            .field("dark_mode", &self.dashboard.dark_mode())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot closure to be Fn; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Decides the starting dark-mode flag.
///
/// A `--theme` flag wins over the settings file. `detect_dark` is only
/// consulted when the winner is [`ThemeMode::System`].
pub fn resolve_dark_mode(
    cli_theme: Option<ThemeMode>,
    config: &Config,
    detect_dark: impl FnOnce() -> bool,
) -> bool {
    cli_theme
        .unwrap_or(config.general.theme_mode)
        .resolve_dark(detect_dark)
}

impl App {
    /// Loads settings, resolves locale and theme, and seeds the dashboard.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let dark_mode = resolve_dark_mode(flags.theme, &config, theming::system_prefers_dark);

        let (mut app, task) =
            Self::from_config(i18n, &config, dark_mode, Box::new(SystemTimeSource));
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        (app, task)
    }

    /// Builds the app from already-loaded settings.
    ///
    /// Seeds with an unknown zone are skipped and reported as warnings.
    pub fn from_config(
        i18n: I18n,
        config: &Config,
        dark_mode: bool,
        time_source: Box<dyn TimeSource>,
    ) -> (Self, Task<Message>) {
        let (dashboard, rejected) = DashboardState::from_seed(&config.dashboard.seed(), dark_mode);
        let (mut app, task) = Self::from_parts(i18n, dashboard, time_source);

        for err in rejected {
            tracing::warn!(error = %err, "skipping configured clock");
            let notification = match &err {
                Error::InvalidTimezone(zone) => {
                    Notification::warning("notification-seed-invalid-timezone")
                        .with_arg("zone", zone.clone())
                }
                other => Notification::from_error(other),
            };
            app.notifications.push(notification);
        }

        (app, task)
    }

    /// Wraps an existing dashboard, creating one view per clock.
    ///
    /// The returned task delivers each view's attach tick.
    pub fn from_parts(
        i18n: I18n,
        dashboard: DashboardState,
        time_source: Box<dyn TimeSource>,
    ) -> (Self, Task<Message>) {
        let clocks: HashMap<ClockId, ClockView> = dashboard
            .clocks()
            .iter()
            .map(|config| (config.id, ClockView::new(config, dashboard.dark_mode())))
            .collect();
        let attach = Task::batch(dashboard.clocks().iter().map(|c| update::attach_tick(c.id)));

        tracing::info!(
            clocks = dashboard.clocks().len(),
            dark_mode = dashboard.dark_mode(),
            locale = %i18n.current_locale(),
            "dashboard ready"
        );

        let app = Self {
            i18n,
            dashboard,
            clocks,
            form: AddClockForm::default(),
            notifications: notifications::Manager::new(),
            time_source,
        };
        (app, attach)
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    #[must_use]
    pub fn clock(&self, id: ClockId) -> Option<&ClockView> {
        self.clocks.get(&id)
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.dashboard.dark_mode())
    }

    fn subscription(&self) -> Subscription<Message> {
        let clock_subs = subscription::create_clock_subscriptions(
            self.dashboard.clocks().iter().map(|clock| clock.id),
        );
        let notification_sub =
            subscription::create_notification_subscription(self.notifications.has_notifications());

        Subscription::batch([clock_subs, notification_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            dashboard: &mut self.dashboard,
            clocks: &mut self.clocks,
            form: &mut self.form,
            notifications: &mut self.notifications,
            time_source: self.time_source.as_ref(),
        };

        match message {
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message);
                Task::none()
            }
            Message::ClockTick { id, fired_at } => {
                update::handle_clock_tick(&mut ctx, id, fired_at);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            dashboard: &self.dashboard,
            clocks: &self.clocks,
            form: &self.form,
            notifications: &self.notifications,
        })
    }
}
