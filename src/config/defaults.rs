// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and layout constants.
//!
//! # Categories
//!
//! - **Window**: initial and minimum window size
//! - **Clock card**: size of the analog face and grid layout
//! - **Notifications**: polling cadence for toast auto-dismiss

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

// ==========================================================================
// Clock Card Defaults
// ==========================================================================

/// Rendered size of one analog face, in logical pixels.
pub const CLOCK_FACE_SIZE: f32 = 192.0;

/// Number of clock cards per grid row.
pub const CLOCKS_PER_ROW: usize = 3;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How often toast auto-dismiss timers are checked while any are showing.
pub const NOTIFICATION_POLL_MS: u64 = 100;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(CLOCK_FACE_SIZE < MIN_WINDOW_WIDTH);
    assert!(CLOCKS_PER_ROW > 0);
};
