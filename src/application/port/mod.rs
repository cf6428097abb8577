// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types and plain strings, ensuring the
//! application layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`content`]: Headless CMS access ([`ContentSource`])
//! - [`storage`]: Durable key/value storage ([`KeyValueStorage`])
//! - [`language`]: Ambient language preference ([`LanguagePreference`])
//! - [`email`]: Transactional email ([`EmailSender`])
//!
//! # Design Notes
//!
//! - Network ports return `impl Future + Send` so callers can hand them to
//!   `iced::Task::perform`
//! - Storage and language ports are synchronous; they are consulted once at
//!   startup or on explicit user action

pub mod content;
pub mod email;
pub mod language;
pub mod storage;

// Re-export main types for convenience
pub use content::{ContentQuery, ContentSource, Endpoint, FetchError};
pub use email::{EmailError, EmailRequest, EmailSender};
pub use language::{FixedLanguage, LanguagePreference};
pub use storage::KeyValueStorage;
