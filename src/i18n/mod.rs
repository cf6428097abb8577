// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! # Features
//!
//! - Embedded Fluent tables for every [`Language`](crate::domain::locale::Language)
//! - Typed [`Translations`] so views cannot ask for a missing string
//! - [`LocaleResolver`]: startup detection, runtime switching, persistence

pub mod fluent;
pub mod resolver;
pub mod translations;

pub use fluent::{load_translations, translations, I18nError};
pub use resolver::{LocaleResolver, LocaleSource};
pub use translations::Translations;

/// Storage key holding the chosen language code.
pub const LANGUAGE_STORAGE_KEY: &str = "portfolio-language";
