// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations are embedded from `assets/i18n/*.ftl`. The locale is chosen
//! from the `--lang` flag, then the config file, then the OS locale, and
//! falls back to `en-US`.

pub mod fluent;
