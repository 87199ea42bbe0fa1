// SPDX-License-Identifier: MPL-2.0
//! Clock time computation independent of any widget.
//!
//! The pieces here are plain functions and small value types so they can be
//! exercised without a window:
//!
//! - [`zone`] converts an instant into wall-clock fields for an IANA zone
//! - [`angles`] turns wall-clock fields into hand rotations and holds the
//!   static face geometry
//! - [`time_source`] supplies "now" and the per-clock tick cadence
//! - [`catalog`] is the fixed timezone menu and its label rule

pub mod angles;
pub mod catalog;
pub mod time_source;
pub mod zone;

pub use angles::{hand_angles, HandAngles};
pub use catalog::{default_label, TimezoneOption, POPULAR_TIMEZONES};
pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource, TICK_INTERVAL};
pub use zone::{zoned_time, Zone, ZonedTime};
