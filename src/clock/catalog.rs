// SPDX-License-Identifier: MPL-2.0
//! The fixed menu of popular timezones offered when adding a clock.

use std::fmt;

/// One entry of the add-clock menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOption {
    /// IANA identifier.
    pub value: &'static str,
    /// Friendly name shown in the menu.
    pub label: &'static str,
}

impl fmt::Display for TimezoneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

pub const POPULAR_TIMEZONES: [TimezoneOption; 10] = [
    TimezoneOption {
        value: "America/New_York",
        label: "New York (EST)",
    },
    TimezoneOption {
        value: "America/Los_Angeles",
        label: "Los Angeles (PST)",
    },
    TimezoneOption {
        value: "America/Chicago",
        label: "Chicago (CST)",
    },
    TimezoneOption {
        value: "Europe/London",
        label: "London (GMT)",
    },
    TimezoneOption {
        value: "Europe/Paris",
        label: "Paris (CET)",
    },
    TimezoneOption {
        value: "Asia/Tokyo",
        label: "Tokyo (JST)",
    },
    TimezoneOption {
        value: "Asia/Shanghai",
        label: "Shanghai (CST)",
    },
    TimezoneOption {
        value: "Asia/Dubai",
        label: "Dubai (GST)",
    },
    TimezoneOption {
        value: "Australia/Sydney",
        label: "Sydney (AEDT)",
    },
    TimezoneOption {
        value: "Pacific/Auckland",
        label: "Auckland (NZDT)",
    },
];

/// Looks up the menu entry for an identifier.
#[must_use]
pub fn find(timezone: &str) -> Option<&'static TimezoneOption> {
    POPULAR_TIMEZONES.iter().find(|option| option.value == timezone)
}

/// Label used when the user does not type one: the first word of the
/// friendly name, or the raw identifier for zones outside the menu.
#[must_use]
pub fn default_label(timezone: &str) -> String {
    find(timezone)
        .and_then(|option| option.label.split_whitespace().next())
        .unwrap_or(timezone)
        .to_string()
}
