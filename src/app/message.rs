// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::dashboard::ClockId;
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// A clock's timer fired. Also sent once right after a clock is created
    /// so it mounts without waiting a full interval.
    ClockTick { id: ClockId, fired_at: Instant },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override. Takes precedence over `theme_mode` in
    /// settings.toml.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CLOCK_DASHBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
