// SPDX-License-Identifier: MPL-2.0
//! `folio` is an internationalized portfolio page built with the Iced GUI
//! framework.
//!
//! The library exposes the pieces that work without a window: the locale
//! resolver and its embedded translation catalog, the CMS content loader
//! with static fallbacks, and the contact form rules.
//!
//! # Layers
//!
//! - [`domain`]: languages, content entities, form rules, tech-stack data
//! - [`application`]: ports and the [`ContentLoader`](application::ContentLoader)
//! - [`infrastructure`]: HTTP, storage and OS-locale adapters
//! - [`i18n`]: Fluent catalog and [`LocaleResolver`](i18n::LocaleResolver)
//! - [`config`]: `settings.toml` and environment overrides
//! - [`app`] and [`ui`]: the Iced page

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
