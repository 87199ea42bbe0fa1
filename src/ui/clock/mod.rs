// SPDX-License-Identifier: MPL-2.0
//! One clock on the dashboard: its analog face and its digital readout.
//!
//! A view starts [`Phase::Unmounted`] and shows placeholders until the
//! first tick reads the time. After that it stays mounted for the rest of
//! its life.

mod face;

pub use face::ClockFace;

use crate::clock::{hand_angles, zoned_time, HandAngles, Zone, ZonedTime};
use crate::config::CLOCK_FACE_SIZE;
use crate::dashboard::{ClockConfig, ClockId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ClockPalette, ColorScheme};
use chrono::{DateTime, Utc};
use iced::widget::canvas::{Cache, Canvas};
use iced::widget::{Column, Text};
use iced::{alignment, font, Element, Font, Length};

/// Digital readout shown before the first tick.
pub const DIGITAL_PLACEHOLDER: &str = "--:--:--";

/// Date line shown before the first tick. A non-breaking space keeps the
/// line height so the card does not jump when the date appears.
pub const DATE_PLACEHOLDER: &str = "\u{00A0}";

/// Time read on the latest tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub zoned: ZonedTime,
    pub angles: HandAngles,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Unmounted,
    Mounted(Reading),
}

pub struct ClockView {
    id: ClockId,
    zone: Zone,
    label: String,
    phase: Phase,
    dark_mode: bool,
    palette: ClockPalette,
    face_cache: Cache,
}

impl std::fmt::Debug for ClockView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockView")
            .field("id", &self.id)
            .field("zone", &self.zone)
            .field("label", &self.label)
            .field("phase", &self.phase)
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

impl ClockView {
    #[must_use]
    pub fn new(config: &ClockConfig, dark_mode: bool) -> Self {
        Self {
            id: config.id,
            zone: config.zone,
            label: config.label.clone(),
            phase: Phase::Unmounted,
            dark_mode,
            palette: ClockPalette::for_mode(dark_mode),
            face_cache: Cache::default(),
        }
    }

    /// Reads the time at `now` and refreshes the readout.
    ///
    /// The first call moves the view to [`Phase::Mounted`].
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let zoned = zoned_time(now, &self.zone);
        let angles = hand_angles(zoned.hour, zoned.minute, zoned.second);
        if self.phase == Phase::Unmounted {
            tracing::debug!(clock = %self.id, zone = %self.zone, "clock mounted");
        }
        self.phase = Phase::Mounted(Reading { zoned, angles });
    }

    /// Switches the face colors. Nothing else about the clock changes.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode == dark_mode {
            return;
        }
        self.dark_mode = dark_mode;
        self.palette = ClockPalette::for_mode(dark_mode);
        self.face_cache.clear();
    }

    #[must_use]
    pub fn id(&self) -> ClockId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, Phase::Mounted(_))
    }

    #[must_use]
    pub fn palette(&self) -> ClockPalette {
        self.palette
    }

    /// Hand rotations from the latest tick, if any.
    #[must_use]
    pub fn hands(&self) -> Option<HandAngles> {
        match self.phase {
            Phase::Mounted(reading) => Some(reading.angles),
            Phase::Unmounted => None,
        }
    }

    #[must_use]
    pub fn digital_text(&self) -> String {
        match self.phase {
            Phase::Mounted(reading) => reading.zoned.digital(),
            Phase::Unmounted => DIGITAL_PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub fn date_text(&self) -> String {
        match self.phase {
            Phase::Mounted(reading) => reading.zoned.date_line(),
            Phase::Unmounted => DATE_PLACEHOLDER.to_string(),
        }
    }

    /// Zone name, analog face, digital time and date, stacked.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let scheme = ColorScheme::for_mode(self.dark_mode);

        let face = Canvas::new(ClockFace {
            cache: &self.face_cache,
            palette: self.palette,
            hands: self.hands(),
        })
        .width(Length::Fixed(CLOCK_FACE_SIZE))
        .height(Length::Fixed(CLOCK_FACE_SIZE));

        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(self.zone.display_name())
                    .size(typography::CAPTION)
                    .color(scheme.text_secondary),
            )
            .push(face)
            .push(
                Text::new(self.digital_text())
                    .size(typography::DISPLAY)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::MONOSPACE
                    })
                    .color(scheme.text_primary),
            )
            .push(
                Text::new(self.date_text())
                    .size(typography::CAPTION)
                    .color(scheme.text_secondary),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardState;
    use chrono::TimeZone;

    fn new_york_view(dark_mode: bool) -> ClockView {
        let mut state = DashboardState::new(dark_mode);
        let id = state
            .add("America/New_York", Some("Home"))
            .expect("valid zone");
        let config = state.get(id).expect("clock was added");
        ClockView::new(config, dark_mode)
    }

    fn january_noon_thirty() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 17, 30, 0)
            .single()
            .expect("valid UTC timestamp")
    }

    #[test]
    fn unmounted_view_shows_placeholders() {
        let view = new_york_view(false);
        assert_eq!(view.phase(), Phase::Unmounted);
        assert_eq!(view.digital_text(), "--:--:--");
        assert_eq!(view.date_text(), "\u{00A0}");
        assert!(view.hands().is_none());
    }

    #[test]
    fn first_tick_mounts_with_zoned_reading() {
        let mut view = new_york_view(false);
        view.tick(january_noon_thirty());

        assert!(view.is_mounted());
        assert_eq!(view.digital_text(), "12:30:00");
        assert_eq!(view.date_text(), "Monday, January 15, 2024");
        let hands = view.hands().expect("mounted view has hands");
        assert_eq!(hands, hand_angles(12, 30, 0));
        assert!((hands.normalized().hour - 285.0).abs() < 1e-9);
    }

    #[test]
    fn later_ticks_stay_mounted_and_advance() {
        let mut view = new_york_view(false);
        let start = january_noon_thirty();
        view.tick(start);
        view.tick(start + chrono::Duration::seconds(1));

        assert!(view.is_mounted());
        assert_eq!(view.digital_text(), "12:30:01");
    }

    #[test]
    fn dark_mode_changes_only_the_palette() {
        let mut view = new_york_view(false);
        view.tick(january_noon_thirty());
        let hands = view.hands();
        let digital = view.digital_text();
        let date = view.date_text();

        view.set_dark_mode(true);

        assert_eq!(view.palette(), ClockPalette::dark());
        assert_eq!(view.hands(), hands);
        assert_eq!(view.digital_text(), digital);
        assert_eq!(view.date_text(), date);
        assert_eq!(view.label(), "Home");
    }

    #[test]
    fn dark_mode_does_not_mount_an_unmounted_view() {
        let mut view = new_york_view(false);
        view.set_dark_mode(true);
        assert!(!view.is_mounted());
        assert_eq!(view.digital_text(), DIGITAL_PLACEHOLDER);
    }
}
