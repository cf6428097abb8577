// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::content::Generation;
use crate::application::port::EmailError;
use crate::domain::content::{Education, Profile, Project};
use crate::ui::{contact, hero, link, navbar, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Contact(contact::Message),
    /// Project and profile links.
    Link(link::Message),
    Notification(notifications::NotificationMessage),
    /// Projects fetched for the work section.
    ProjectsLoaded {
        generation: Generation,
        projects: Vec<Project>,
    },
    /// Profile and education fetched for the about section.
    AboutLoaded {
        generation: Generation,
        profile: Option<Profile>,
        education: Vec<Education>,
    },
    /// Outcome of a contact form send.
    ContactSent(Result<(), EmailError>),
    Tick(Instant), // Periodic tick for banner auto-dismiss
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Session-only language override (e.g. `ja`, `de-AT`). Never persisted.
    pub lang: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip every content fetch and render fallback data only.
    pub offline: bool,
}
