// SPDX-License-Identifier: MPL-2.0
//! `clock_dashboard` shows a grid of analog and digital clocks, one per
//! IANA timezone, built with the Iced GUI framework.
//!
//! Clocks can be added from a menu of popular zones, removed, and switched
//! between light and dark palettes. Time computation in [`clock`] is kept
//! free of widgets so it can be tested and benchmarked on its own.

#![doc(html_root_url = "https://docs.rs/clock_dashboard/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod ui;
