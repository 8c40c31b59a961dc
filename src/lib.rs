// SPDX-License-Identifier: MPL-2.0
//! `folio_i18n` is the internationalization subsystem of a personal
//! portfolio site.
//!
//! It provides the locale catalog, key-path translation resolution with
//! fail-soft fallback, and the language-preference lifecycle (detection,
//! switching, persistence). The page components that render the resolved
//! content consume this crate; they are not part of it.

#![doc(html_root_url = "https://docs.rs/folio_i18n/0.2.0")]

pub mod config;
pub mod error;
pub mod i18n;

pub use i18n::{I18n, TranslationValue};
