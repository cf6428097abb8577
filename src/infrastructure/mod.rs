// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`microcms`]: Content service over HTTP (implements [`ContentSource`])
//! - [`emailjs`]: Email service over HTTP (implements [`EmailSender`])
//! - [`storage`]: CBOR file and in-memory stores (implement [`KeyValueStorage`])
//! - [`system_locale`]: OS locale (implements [`LanguagePreference`])
//! - [`browser`]: Opens external links with the platform URL handler
//!
//! [`ContentSource`]: crate::application::port::ContentSource
//! [`EmailSender`]: crate::application::port::EmailSender
//! [`KeyValueStorage`]: crate::application::port::KeyValueStorage
//! [`LanguagePreference`]: crate::application::port::LanguagePreference

pub mod browser;
pub mod emailjs;
pub mod microcms;
pub mod storage;
pub mod system_locale;

#[cfg(test)]
pub(crate) mod test_server;

pub use emailjs::EmailJsSender;
pub use microcms::MicroCmsClient;
pub use storage::{FileStorage, MemoryStorage};
pub use system_locale::SystemLanguage;
