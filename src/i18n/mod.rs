// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portfolio site.
//!
//! This module provides localization over per-locale translation tables
//! bundled as JSON. It handles locale detection, table loading, and
//! key-path resolution.
//!
//! # Features
//!
//! - Automatic locale detection from an explicit override, persisted
//!   preference, or system settings
//! - Translation tables embedded at build time, loaded in full at startup
//! - Runtime language switching with persisted preference
//! - Fallback to the key path itself when a translation is missing

pub mod catalog;
pub mod resolver;
pub mod value;

pub use catalog::Catalog;
pub use resolver::{apply_locale_change, I18n, DEFAULT_LOCALE};
pub use value::TranslationValue;
