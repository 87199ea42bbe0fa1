// SPDX-License-Identifier: MPL-2.0
//! IANA timezone handling and wall-clock conversion.
//!
//! Identifiers are validated once, when a [`Zone`] is parsed. After that the
//! conversion from an instant is total, so a ticking clock can never fail on
//! a bad zone name.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Pattern for the digital readout (24-hour, zero-padded).
pub const DIGITAL_FORMAT: &str = "%H:%M:%S";

/// Pattern for the date line, e.g. "Monday, January 15, 2024".
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// A validated IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone(Tz);

impl Zone {
    /// Parses an IANA identifier such as `"Europe/Paris"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimezone`] if the identifier is not in the
    /// timezone database.
    pub fn parse(identifier: &str) -> Result<Self> {
        Tz::from_str(identifier)
            .map(Zone)
            .map_err(|_| Error::InvalidTimezone(identifier.to_string()))
    }

    /// The canonical identifier, e.g. `"America/New_York"`.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        self.0.name()
    }

    /// Human-friendly form of the identifier shown under the clock label.
    ///
    /// Only the first underscore is replaced, so `"America/Port_of_Spain"`
    /// reads `"America/Port of_Spain"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.identifier().replacen('_', " ", 1)
    }

    pub(crate) fn tz(&self) -> Tz {
        self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Wall-clock fields of an instant as observed in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub date: NaiveDate,
    local: NaiveDateTime,
}

impl ZonedTime {
    /// Digital readout, `HH:mm:ss`.
    #[must_use]
    pub fn digital(&self) -> String {
        self.local.format(DIGITAL_FORMAT).to_string()
    }

    /// Long date line with full weekday and month names.
    #[must_use]
    pub fn date_line(&self) -> String {
        self.local.format(DATE_FORMAT).to_string()
    }

    /// Day of week, handy for callers that group clocks by local day.
    #[must_use]
    pub fn weekday(&self) -> chrono::Weekday {
        self.date.weekday()
    }
}

/// Converts `instant` into the wall-clock fields of `zone`, applying the
/// UTC offset (including daylight saving) in effect at that instant.
#[must_use]
pub fn zoned_time(instant: DateTime<Utc>, zone: &Zone) -> ZonedTime {
    let local = instant.with_timezone(&zone.tz()).naive_local();
    ZonedTime {
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        date: local.date(),
        local,
    }
}
