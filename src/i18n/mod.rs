// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time from `assets/i18n/`
//! - Fallback to the default locale when translations are missing
//!
//! Clock readouts (`HH:mm:ss` and the long date line) are not translated;
//! only the dashboard chrome goes through Fluent.

pub mod fluent;
