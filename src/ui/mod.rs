// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the app, and a
//! `view` taking a `ViewContext`.
//!
//! - [`dashboard`] - Header, add-clock panel and clock grid
//! - [`clock`] - One clock's face, readout and mount state
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark palettes and startup theme resolution

pub mod clock;
pub mod dashboard;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
