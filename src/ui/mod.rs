// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every section follows the Elm-style "state down, messages up" pattern and
//! receives its [`Translations`](crate::i18n::Translations) explicitly.
//!
//! # Sections
//!
//! - [`navbar`] - Section links and the language picker
//! - [`hero`] - Headline and calls to action
//! - [`work`] - Project cards
//! - [`about`] - Profile and education
//! - [`tech`] - Skill bars per category
//! - [`contact`] - Contact form
//!
//! # Shared Infrastructure
//!
//! - [`heading`] - Section title and subtitle
//! - [`link`] - External links opened in the browser
//! - [`notifications`] - Banners for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod heading;
pub mod hero;
pub mod link;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod tech;
pub mod theming;
pub mod work;
