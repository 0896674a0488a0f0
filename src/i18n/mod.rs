// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! The edit coordinator only ever hands i18n keys to its dialog and
//! notification ports; this module resolves them into display strings
//! using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from an explicit choice, the config file, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
